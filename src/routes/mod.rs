pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod profile;
pub(crate) mod refresh_token;
pub(crate) mod signup;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use login::*;
pub use logout::*;
pub use profile::*;
pub use refresh_token::*;
pub use signup::*;
pub use verify_token::*;
