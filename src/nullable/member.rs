//! Read-only, argument-less accessors used as mappers.

/// A read-only, argument-less accessor declared on `A`, returning `B`.
///
/// Any method taking `&self` and nothing else coerces to this type, so a
/// method path such as `Person::id` can be passed to
/// [`bind_member`](crate::bind_member) and [`fmap_member`](crate::fmap_member)
/// without wrapping it in a closure.
///
/// # Examples
///
/// ```rust
/// use absent::nullable::Member;
///
/// struct Person {
///     age: u32,
/// }
///
/// impl Person {
///     fn age(&self) -> u32 {
///         self.age
///     }
/// }
///
/// let accessor: Member<Person, u32> = Person::age;
/// assert_eq!(accessor(&Person { age: 31 }), 31);
/// ```
pub type Member<A, B> = fn(&A) -> B;
