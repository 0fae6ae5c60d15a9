/// A type whose equality is defined solely by a stable identifier.
///
/// Implementors write `PartialEq` in terms of [`Entity::same_identity`]
/// instead of deriving structural equality.
pub trait Entity {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;

    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
