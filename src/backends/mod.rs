pub mod matlab;
