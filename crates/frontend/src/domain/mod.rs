pub mod a001_user;
