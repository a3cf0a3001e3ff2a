use crossterm::event::KeyEvent;
use internships_core::{admins, error};

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// The server answered our request to create an admin account
    AdminCreated(error::Result<admins::Resp>),

    /// Something bad happened; display it to the user
    Problem(String),
}
