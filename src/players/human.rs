pub struct Human;

impl Player for Human {
    fn choose(&mut self, _: &Match) -> Move {
        Input::new()
            .with_prompt("Enter your choice (r/rock, p/paper, s/scissors)")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match Move::try_from(i.as_str()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(e),
                }
            })
            .interact()
            .map(|i: String| Move::try_from(i.as_str()).expect("validated"))
            .unwrap()
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use super::Player;
use crate::game::choice::Move;
use crate::game::engine::Match;
use dialoguer::Input;
use std::fmt::{Debug, Formatter};
