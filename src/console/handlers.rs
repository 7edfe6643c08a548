//! Console Command Handlers
//!
//! Dispatches each command of the main loop to the cart and prints the
//! outcome.

use super::helpers::*;
use super::models::*;
use super::session::Session;
use crate::cart::{export_lines, summarize, Category, Product, ProductDetails};
use crate::error::{CartError, SessionError};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Runs one command. Not-found and bad-input conditions are reported to
    /// the user and never end the loop.
    pub fn execute_command(&mut self, command: Command) -> Result<Flow, SessionError> {
        match command {
            Command::Add => self.handle_add()?,
            Command::Remove => self.handle_remove()?,
            Command::Summary => self.handle_summary()?,
            Command::Quantity => self.handle_quantity()?,
            Command::Export => self.handle_export()?,
            Command::Help => self.console.say(HELP_TEXT)?,
            Command::Terminate => return Ok(Flow::Stop),
            Command::Unknown => self.console.say(UNKNOWN_COMMAND_MESSAGE)?,
        }
        Ok(Flow::Continue)
    }

    fn handle_add(&mut self) -> Result<(), SessionError> {
        if let Some(product) = self.input_product()? {
            self.cart.add_product(product);
        }
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<(), SessionError> {
        let id = self.console.prompt_until(EXISTING_EAN_PROMPT, parse_ean)?;

        match self.cart.remove_product(id) {
            Ok(removed) => {
                if !self.registry.retire(removed.id()) {
                    debug!(id = %removed.id(), "Removed product had no registered code");
                }
                self.console.say(REMOVED_MESSAGE)
            }
            Err(err) => self.console.say(err),
        }
    }

    fn handle_quantity(&mut self) -> Result<(), SessionError> {
        let id = self.console.prompt_until(EXISTING_EAN_PROMPT, parse_ean)?;

        if self.cart.find(id).is_none() {
            return self.console.say(CartError::NotFound(id));
        }

        let quantity = self
            .console
            .prompt_until(NEW_QUANTITY_PROMPT, parse_quantity)?;

        match self.cart.change_quantity(id, quantity) {
            Ok(()) => {
                info!(id = %id, quantity, "Quantity changed");
                self.console.say(QUANTITY_CHANGED_MESSAGE)
            }
            Err(err) => self.console.say(err),
        }
    }

    fn handle_summary(&mut self) -> Result<(), SessionError> {
        let summary = summarize(&self.cart, self.config.totals);
        self.console.say(SUMMARY_HEADER)?;
        self.console.say(summary)
    }

    fn handle_export(&mut self) -> Result<(), SessionError> {
        for line in export_lines(&self.cart)? {
            self.console.say(line)?;
        }
        Ok(())
    }

    /// Asks for every attribute of a new product. The shared fields are always
    /// asked; an unrecognised category is reported after them and yields
    /// `None` without using up the EAN code.
    pub fn input_product(&mut self) -> Result<Option<Product>, SessionError> {
        let category = parse_category(&self.console.read_line(TYPE_PROMPT)?);

        let name = self.console.prompt_until(NAME_PROMPT, parse_text)?;
        let price = self.console.prompt_until(PRICE_PROMPT, parse_price)?;
        let quantity = self.console.prompt_until(QUANTITY_PROMPT, parse_quantity)?;
        let registry = &self.registry;
        let id = self
            .console
            .prompt_until(NEW_EAN_PROMPT, |line| parse_new_ean(line, registry))?;
        let brand = self.console.prompt_until(BRAND_PROMPT, parse_text)?;

        let category = match category {
            Ok(category) => category,
            Err(err) => {
                warn!(error = ?err, "Unrecognised product category");
                self.console.say(err)?;
                return Ok(None);
            }
        };

        let details = match category {
            Category::Clothing => ProductDetails::Clothing {
                size: self.console.prompt_until(SIZE_PROMPT, parse_text)?,
                material: self.console.prompt_until(MATERIAL_PROMPT, parse_text)?,
            },
            Category::Food => ProductDetails::Food {
                expiry_date: self.console.prompt_until(EXPIRY_PROMPT, parse_expiry_date)?,
                gluten_free: self.console.prompt_until(GLUTEN_FREE_PROMPT, parse_yes_no)?,
                suitable_for_vegetarians: self
                    .console
                    .prompt_until(VEGETARIAN_PROMPT, parse_yes_no)?,
            },
            Category::Medicine => ProductDetails::Medicine {
                expiry_date: self.console.prompt_until(EXPIRY_PROMPT, parse_expiry_date)?,
                tablet_or_capsule: self
                    .console
                    .prompt_until(DOSAGE_FORM_PROMPT, parse_dosage_form)?,
                size: self.console.prompt_until(SIZE_PROMPT, parse_text)?,
            },
        };

        if !self.registry.claim(id) {
            debug!(id = %id, "EAN code was already registered");
        }
        Ok(Some(Product::new(name, price, quantity, id, brand, details)))
    }
}
