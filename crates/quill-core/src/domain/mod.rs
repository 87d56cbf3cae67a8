//! Domain entities - the core business objects.

mod post;
mod session;
mod view;

pub use post::{BlogPost, NewBlogPost, PostSummary};
pub use session::SessionUser;
pub use view::{AuthLinks, SessionView};
