pub mod comments;
pub mod follows;
pub mod health;
pub mod likes;
pub mod posts;
pub mod users;

pub use comments::*;
pub use follows::*;
pub use health::*;
pub use likes::*;
pub use posts::*;
pub use users::*;
