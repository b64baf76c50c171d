pub mod check;
pub mod evaluate;
pub mod interpret;
pub mod quote;
pub mod resolve;
pub mod semantics;
pub mod substitute;
pub mod syntax;
pub mod unparse;
