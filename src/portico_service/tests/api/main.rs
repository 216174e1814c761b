mod helpers;
mod home;
mod login;
mod password_change;
mod register;
mod special;
