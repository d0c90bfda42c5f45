mod commands;
mod fallback;
mod helpers;
mod requests;
