pub use super::employee::Entity as Employee;
pub use super::movement::Entity as Movement;
pub use super::unit::Entity as Unit;
