//! Console Command Models and Constants
//!
//! The command vocabulary of the interactive loop and every fixed line of
//! text it prints.

// =============================================================================
// Console Constants
// =============================================================================

pub const STARTED_MESSAGE: &str = "The program has started.";
pub const GOODBYE_MESSAGE: &str = "Goodbye.";
pub const COMMAND_PROMPT: &str = "Insert your next command (H for help): ";
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Command not recognised. Please try again";
pub const SUMMARY_HEADER: &str = "This is the total of the expenses: ";
pub const REMOVED_MESSAGE: &str = "Product Successfully Removed";
pub const QUANTITY_CHANGED_MESSAGE: &str = "Product's Quantity Successfully Changed";

pub const HELP_TEXT: &str = "\
The program supports the following commands:
   [A] - Add a new product to the cart
   [R] - Remove a product from the cart
   [S] - Print a summary of the cart
   [Q] - Change the quantity of a product
   [E] - Export a JSON version of the cart
   [T] - Terminate the program
   [H] - List the supported commands";

// Add-product prompts, in the order they are asked.
pub const TYPE_PROMPT: &str = "Insert its type (must be 'Clothing', 'Food', or 'Medicine'): ";
pub const NAME_PROMPT: &str = "Insert its name (must be a string): ";
pub const PRICE_PROMPT: &str = "Insert its price (must be a float): ";
pub const QUANTITY_PROMPT: &str = "Insert its quantity (must be an integer): ";
pub const NEW_EAN_PROMPT: &str = "Insert its EAN code (must be a unique 13 digit sequence): ";
pub const BRAND_PROMPT: &str = "Insert its brand: ";
pub const SIZE_PROMPT: &str = "Insert its size (must be a string): ";
pub const MATERIAL_PROMPT: &str = "Insert its material (must be a string): ";
pub const EXPIRY_PROMPT: &str = "Insert its expiry_date (format: \"YYYY-MM-DD\"): ";
pub const GLUTEN_FREE_PROMPT: &str =
    "Is this product gluten free? Insert 'y' for yes or 'n' for no: ";
pub const VEGETARIAN_PROMPT: &str =
    "Is this product suitable for vegetarians? Insert 'y' for yes or 'n' for no: ";
pub const DOSAGE_FORM_PROMPT: &str = "Insert 't' for tablet or 'c' for capsule: ";

// Lookup prompts for R and Q.
pub const EXISTING_EAN_PROMPT: &str = "Insert its EAN code (must be a 13 digit sequence): ";
pub const NEW_QUANTITY_PROMPT: &str = "Enter quantity (must be an integer): ";

// =============================================================================
// Commands
// =============================================================================

/// A single-character command typed at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Summary,
    Quantity,
    Export,
    Terminate,
    Help,
    Unknown,
}

impl Command {
    /// Matches the whole line exactly; anything else is `Unknown`.
    pub fn parse(input: &str) -> Self {
        match input {
            "A" => Command::Add,
            "R" => Command::Remove,
            "S" => Command::Summary,
            "Q" => Command::Quantity,
            "E" => Command::Export,
            "T" => Command::Terminate,
            "H" => Command::Help,
            _ => Command::Unknown,
        }
    }
}

/// Whether the loop keeps reading commands after one has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}
