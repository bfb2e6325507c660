mod helpers;

mod login;
mod logout;
mod refresh;
mod signup;
mod verify_token;
