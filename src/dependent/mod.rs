pub mod check;
pub mod conversion;
pub mod evaluate;
pub mod interpret;
pub mod pts;
pub mod quote;
pub mod resolve;
pub mod semantics;
pub mod substitute;
pub mod syntax;
pub mod unparse;
