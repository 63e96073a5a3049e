//! # Petdesk Session Crate
//!
//! The interactive control flow governing list -> select -> act transitions.
//! The loop is an explicit state machine so "quit" is a terminal state
//! rather than a scattered early exit, and it is generic over its input,
//! output, and store so the whole flow can be tested with scripted input
//! and an in-memory store.

// Declare the modules that constitute this crate.
pub mod error;
pub mod menu;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::SessionError;
pub use store::PetStore;

use core_types::{PetRecord, PetUpdate, parse_age};
use std::io::{BufRead, Write};

/// The states of the interactive loop.
///
/// `PetSelected` and `Editing` carry the index of the chosen pet within the
/// most recently fetched list. `Terminated` is the single terminal state;
/// every "Goodbye!" path goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    ListPets,
    PetSelected(usize),
    Editing(usize),
    Terminated,
}

/// The interactive session: fetch, present, select, act, repeat.
pub struct Session<S, R, W> {
    store: S,
    input: R,
    output: W,
    pets: Vec<PetRecord>,
}

impl<S, R, W> Session<S, R, W>
where
    S: PetStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            pets: Vec::new(),
        }
    }

    /// Drives the state machine until it reaches `Terminated`.
    ///
    /// Database failures degrade to "no data" inside the states; the only
    /// errors that surface here are console I/O failures.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        let mut state = SessionState::ListPets;
        loop {
            state = match state {
                SessionState::ListPets => self.list_pets().await?,
                SessionState::PetSelected(index) => self.select_action(index)?,
                SessionState::Editing(index) => self.edit_pet(index).await?,
                SessionState::Terminated => break,
            };
        }
        Ok(())
    }

    /// Re-fetches the pets, renders the menu, and prompts until the user
    /// picks a valid entry or quits. Invalid or out-of-range input
    /// re-prompts without a state change (and without re-fetching).
    async fn list_pets(&mut self) -> Result<SessionState, SessionError> {
        self.pets = match self.store.fetch_pets().await {
            Ok(pets) => {
                tracing::info!(count = pets.len(), "Pet data fetched successfully.");
                pets
            }
            Err(e) => {
                tracing::error!(error = %e, "Error while fetching pet data.");
                Vec::new()
            }
        };

        if self.pets.is_empty() {
            writeln!(self.output, "No pets found in the database.")?;
            return Ok(SessionState::Terminated);
        }

        loop {
            menu::render(&mut self.output, &self.pets)?;

            let Some(choice) = self.prompt("\nChoice: ")? else {
                return Ok(SessionState::Terminated);
            };

            if choice.eq_ignore_ascii_case("q") {
                writeln!(self.output, "Goodbye!")?;
                return Ok(SessionState::Terminated);
            }

            match choice.parse::<usize>() {
                Ok(number) if (1..=self.pets.len()).contains(&number) => {
                    return Ok(SessionState::PetSelected(number - 1));
                }
                Ok(_) => {
                    writeln!(
                        self.output,
                        "\nInvalid choice. Please select a valid number from the list or 'Q' to quit."
                    )?;
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "\nInvalid choice. Please enter a number corresponding to a pet or 'Q' to quit."
                    )?;
                }
            }
        }
    }

    /// Shows the chosen pet and prompts for the next action. An unknown
    /// letter re-prompts without leaving this state.
    fn select_action(&mut self, index: usize) -> Result<SessionState, SessionError> {
        writeln!(self.output, "\nYou have chosen {}\n", self.pets[index])?;

        loop {
            let Some(option) =
                self.prompt("Would you like to [C]ontinue, [Q]uit, or [E]dit this pet? ")?
            else {
                return Ok(SessionState::Terminated);
            };

            match option.to_lowercase().as_str() {
                "q" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(SessionState::Terminated);
                }
                "c" => return Ok(SessionState::ListPets),
                "e" => return Ok(SessionState::Editing(index)),
                _ => {
                    writeln!(self.output, "Invalid option. Please choose C, Q, or E.")?;
                }
            }
        }
    }

    /// Prompts for a new name and age, then persists whatever changed.
    ///
    /// Edits are staged in a `PetUpdate` and only written on normal
    /// completion, so typing "quit" at either prompt terminates without
    /// persisting anything from this edit.
    async fn edit_pet(&mut self, index: usize) -> Result<SessionState, SessionError> {
        writeln!(
            self.output,
            "\nYou have chosen to edit {}.\n",
            self.pets[index].name
        )?;

        let mut update = PetUpdate::default();

        let Some(new_name) = self.prompt("New name: [ENTER == no change] ")? else {
            return Ok(SessionState::Terminated);
        };
        if new_name.eq_ignore_ascii_case("quit") {
            writeln!(self.output, "Goodbye!")?;
            return Ok(SessionState::Terminated);
        }
        if !new_name.is_empty() {
            update.name = Some(new_name);
        }

        let Some(new_age) = self.prompt("New age: [ENTER == no change] ")? else {
            return Ok(SessionState::Terminated);
        };
        if new_age.eq_ignore_ascii_case("quit") {
            writeln!(self.output, "Goodbye!")?;
            return Ok(SessionState::Terminated);
        }
        if !new_age.is_empty() {
            match parse_age(&new_age) {
                Ok(age) => update.age = Some(age),
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected age input.");
                    writeln!(self.output, "Invalid input for age. No changes made to age.")?;
                }
            }
        }

        if update.is_empty() {
            return Ok(SessionState::ListPets);
        }

        let pet_id = self.pets[index].id;
        match self.store.apply_update(pet_id, &update).await {
            Ok(()) => {
                if update.name.is_some() {
                    writeln!(self.output, "Pet name has been updated.")?;
                }
                if update.age.is_some() {
                    writeln!(self.output, "Pet age has been updated.")?;
                }
                self.pets[index].apply(&update);
                writeln!(self.output, "Updates saved.")?;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error while saving pet updates.");
                writeln!(self.output, "Updates could not be saved.")?;
            }
        }

        Ok(SessionState::ListPets)
    }

    /// Writes a prompt and reads one trimmed line. Returns `None` when the
    /// input stream is exhausted, which the states treat as a quit.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
