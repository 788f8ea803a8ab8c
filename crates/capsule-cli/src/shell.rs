//! # Interactive Shell
//!
//! The front-desk dialogue: ask for a capacity, then loop over the guest
//! menu until the operator confirms exit.
//!
//! ```text
//! open ──▶ ┌─▶ menu ──▶ check in | check out | view guests ─┐
//!          │                                                 │
//!          └──────────────── exit? no ◀──────────────────────┘
//!                            exit? yes ──▶ done
//! ```
//!
//! Every rejected operation is printed and the loop continues. End of input
//! at any prompt ends the session.

use std::io::{self, BufRead, Write};

use capsule_core::{parse_capsule_number, CapsuleRegistry, RegistryError};

/// One entry of the guest menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Book a guest into a capsule.
    CheckIn,
    /// Vacate a capsule.
    CheckOut,
    /// Show the window of capsules around a number.
    ViewGuests,
    /// Leave, after confirmation.
    Exit,
}

impl MenuOption {
    /// Interpret a menu choice typed by the operator.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<i64>().ok()? {
            1 => Some(Self::CheckIn),
            2 => Some(Self::CheckOut),
            3 => Some(Self::ViewGuests),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A console session over an input and an output stream.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Wrap the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run a whole session: open the registry, then serve the menu.
    pub fn run(&mut self, capacity: Option<i64>) -> anyhow::Result<()> {
        let Some(mut registry) = self.open(capacity)? else {
            return Ok(());
        };
        self.serve(&mut registry)
    }

    /// Print the banner and build the registry.
    ///
    /// With no `capacity` the operator is asked until a positive integer is
    /// entered. Returns `None` if input ends first.
    pub fn open(&mut self, capacity: Option<i64>) -> anyhow::Result<Option<CapsuleRegistry>> {
        writeln!(self.output, "Welcome to the Capsule-Hotel")?;
        writeln!(self.output, "----------------------------")?;

        let registry = match capacity {
            Some(capacity) => CapsuleRegistry::new(capacity)?,
            None => match self.prompt_capacity()? {
                Some(registry) => registry,
                None => return Ok(None),
            },
        };

        writeln!(
            self.output,
            "There are {} unoccupied capsules ready to be booked.",
            registry.vacant_count()
        )?;
        writeln!(self.output)?;
        tracing::info!(capacity = registry.capacity(), "registry opened");
        Ok(Some(registry))
    }

    /// Serve the guest menu against `registry` until exit or end of input.
    pub fn serve(&mut self, registry: &mut CapsuleRegistry) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option [1-4]: ")? else {
                break;
            };
            let option = MenuOption::parse(&choice);
            tracing::debug!(?option, "menu choice");

            let flow = match option {
                Some(MenuOption::CheckIn) => self.check_in(registry)?,
                Some(MenuOption::CheckOut) => self.check_out(registry)?,
                Some(MenuOption::ViewGuests) => self.view_guests(registry)?,
                Some(MenuOption::Exit) => self.confirm_exit()?,
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        tracing::info!(guests = registry.occupied_count(), "session ended");
        Ok(())
    }

    fn prompt_capacity(&mut self) -> io::Result<Option<CapsuleRegistry>> {
        loop {
            let Some(line) = self.prompt("Enter the number of capsules: ")? else {
                return Ok(None);
            };
            match parse_capsule_number(&line).and_then(CapsuleRegistry::new) {
                Ok(registry) => return Ok(Some(registry)),
                Err(RegistryError::Parse { .. }) => {
                    writeln!(self.output, "ERROR")?;
                    writeln!(self.output, "Please enter a valid number.")?;
                }
                Err(err) => {
                    writeln!(self.output, "ERROR")?;
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn check_in(&mut self, registry: &mut CapsuleRegistry) -> io::Result<Flow> {
        self.heading("Guest Check In")?;
        let Some(guest) = self.prompt("Guest Name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(number) = self.prompt_number(registry.capacity())? else {
            return Ok(Flow::Quit);
        };

        match number.and_then(|n| registry.check_in(n, guest)) {
            Ok(booking) => {
                tracing::info!(capsule = booking.number, guest = %booking.guest, "guest checked in");
                writeln!(self.output, "SUCCESS!")?;
                writeln!(
                    self.output,
                    "{} is booked in capsule #{}.",
                    booking.guest, booking.number
                )?;
            }
            Err(err) => self.reject("check-in", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn check_out(&mut self, registry: &mut CapsuleRegistry) -> io::Result<Flow> {
        if registry.is_empty() {
            self.reject("check-out", &RegistryError::NoGuests)?;
            return Ok(Flow::Continue);
        }

        self.heading("Guest Check Out")?;
        let Some(number) = self.prompt_number(registry.capacity())? else {
            return Ok(Flow::Quit);
        };

        match number.and_then(|n| registry.check_out(n)) {
            Ok(booking) => {
                tracing::info!(capsule = booking.number, guest = %booking.guest, "guest checked out");
                writeln!(self.output, "SUCCESS!")?;
                writeln!(
                    self.output,
                    "{} has been checked out from capsule #{}.",
                    booking.guest, booking.number
                )?;
            }
            Err(err) => self.reject("check-out", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn view_guests(&mut self, registry: &CapsuleRegistry) -> io::Result<Flow> {
        self.heading("View Guests")?;
        let Some(number) = self.prompt_number(registry.capacity())? else {
            return Ok(Flow::Quit);
        };

        match number.and_then(|n| registry.view_window(n)) {
            Ok(window) => {
                tracing::debug!(
                    first = window.first().map(|e| e.number),
                    last = window.last().map(|e| e.number),
                    "window computed"
                );
                writeln!(self.output, "Capsule: Guest")?;
                writeln!(self.output, "==============")?;
                for entry in &window {
                    writeln!(self.output, "{entry}")?;
                }
                writeln!(self.output)?;
            }
            Err(err) => self.reject("view", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn confirm_exit(&mut self) -> io::Result<Flow> {
        self.heading("Exit")?;
        writeln!(self.output, "Are you sure you want to exit?")?;
        writeln!(self.output, "All data will be lost")?;
        let answer = self.prompt("Exit [y/n]: ")?;
        Ok(match answer {
            Some(answer) if !answer.trim().eq_ignore_ascii_case("y") => Flow::Continue,
            _ => Flow::Quit,
        })
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.heading("Guest Menu")?;
        for (i, label) in ["Check In", "Check Out", "View Guests", "Exit"].iter().enumerate() {
            writeln!(self.output, "{}. {label}", i + 1)?;
        }
        Ok(())
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{}", "=".repeat(title.len()))
    }

    fn reject(&mut self, action: &str, err: &RegistryError) -> io::Result<()> {
        tracing::warn!(action, error = %err, "operation rejected");
        if *err != RegistryError::NoGuests {
            writeln!(self.output, "ERROR")?;
        }
        writeln!(self.output, "{err}")
    }

    /// Ask for a capsule number. The outer `Option` is `None` at end of input.
    fn prompt_number(
        &mut self,
        capacity: usize,
    ) -> io::Result<Option<Result<i64, RegistryError>>> {
        let line = self.prompt(&format!("Capsule #[1-{capacity}]: "))?;
        Ok(line.map(|l| parse_capsule_number(&l)))
    }

    /// Print `label` and read one line without its terminator.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
