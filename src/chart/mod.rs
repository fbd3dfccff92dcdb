pub mod aspect;
pub mod element;
pub mod house;
pub mod person;

pub use self::aspect::{Aspect, StatNature, ALL_ASPECTS};
pub use self::element::Element;
pub use self::house::House;
pub use self::person::{Person, Placement};
