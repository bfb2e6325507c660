mod login;
mod logout;
mod profile;
mod refresh_token;
mod signup;
mod verify_token;

pub use login::*;
pub use logout::*;
pub use profile::*;
pub use refresh_token::*;
pub use signup::*;
pub use verify_token::*;
