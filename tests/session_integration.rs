//! Integration tests for the interactive cart session
//!
//! These tests drive a whole session through scripted console input and
//! check the transcript, covering:
//! - Adding products of every category
//! - Summary and JSON export
//! - Removal and quantity changes, including not-found cases
//! - EAN uniqueness across a session
//! - Help, unknown commands and termination

use serde_json::{json, Value};
use shopping_cart_cli::config::{SessionConfig, TotalsMode};
use shopping_cart_cli::console::Session;
use std::io::Cursor;

const BREAD: &str = "A\nFood\nBread\n2.5\n3\n1234567890123\nAcme\n2030-01-31\nn\ny\n";
const JUMPER: &str = "A\nClothing\nJumper\n30\n1\n4006381333931\nGap\nL\nWool\n";
const ASPIRIN: &str = "A\nMedicine\nAspirin\n4.25\n2\n5000000000001\nBayer\n2027-06-01\nt\n500mg\n";

/// Helper function to run a full session over `script` and return the
/// transcript along with the finished session
fn run_session_with(
    script: &str,
    config: SessionConfig,
) -> (String, Session<Cursor<Vec<u8>>, Vec<u8>>) {
    let mut session = Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), config);
    session.run().unwrap();

    let transcript = String::from_utf8(session.writer().clone()).unwrap();
    (transcript, session)
}

/// Helper function to run a session with the default configuration
fn run_session(script: &str) -> String {
    run_session_with(script, SessionConfig::default()).0
}

/// Helper function to extract the JSON lines printed by `E`
fn exported(transcript: &str) -> Vec<Value> {
    transcript
        .lines()
        .filter_map(|line| line.find('{').map(|start| &line[start..]))
        .map(|json| serde_json::from_str(json).unwrap())
        .collect()
}

#[test]
fn test_start_and_terminate() {
    let out = run_session("T\n");

    assert!(out.starts_with("The program has started.\n"));
    assert!(out.contains("Insert your next command (H for help): "));
    assert!(out.ends_with("Goodbye.\n"));
}

#[test]
fn test_eof_ends_session_gracefully() {
    let out = run_session("H\n");
    assert!(out.ends_with("Goodbye.\n"));
}

#[test]
fn test_help_and_unknown_command() {
    let out = run_session("H\nX\nh\nT\n");

    assert!(out.contains("The program supports the following commands:"));
    assert!(out.contains("   [E] - Export a JSON version of the cart"));
    assert_eq!(out.matches("Command not recognised. Please try again").count(), 2);
}

#[test]
fn test_bread_summary_exact() {
    let out = run_session(&format!("{}S\nT\n", BREAD));

    assert!(out.contains("This is the total of the expenses: \n"));
    assert!(out.contains("   1 - 3 * 2.5 = 7.5\n"));
    assert!(out.contains("  Total = 7.5\n"));
}

#[test]
fn test_bread_summary_truncated() {
    let config = SessionConfig {
        totals: TotalsMode::Truncated,
    };
    let (out, _) = run_session_with(&format!("{}S\nT\n", BREAD), config);

    assert!(out.contains("   1 - 3 * 2.5 = 6\n"));
    assert!(out.contains("  Total = 6\n"));
}

#[test]
fn test_bread_export() {
    let out = run_session(&format!("{}E\nT\n", BREAD));

    assert_eq!(
        exported(&out),
        vec![json!({
            "name": "Bread",
            "price": 2.5,
            "quantity": 3,
            "id": 1234567890123u64,
            "brand": "Acme",
            "category": "Food",
            "expiry_date": "2030-01-31",
            "gluten_free": "n",
            "suitable_for_vegetarians": "y"
        })]
    );
}

#[test]
fn test_export_sorted_by_name() {
    let out = run_session(&format!("{}{}{}E\nT\n", JUMPER, BREAD, ASPIRIN));

    let names: Vec<String> = exported(&out)
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Aspirin", "Bread", "Jumper"]);

    let aspirin = &exported(&out)[0];
    assert_eq!(aspirin["category"], "Medicine");
    assert_eq!(aspirin["tablet_or_capsule"], "t");
    assert_eq!(aspirin["size"], "500mg");
}

#[test]
fn test_summary_totals_multiple_products() {
    let out = run_session(&format!("{}{}S\nT\n", JUMPER, BREAD));

    assert!(out.contains("   1 - 3 * 2.5 = 7.5\n"));
    assert!(out.contains("   2 - 1 * 30.0 = 30.0\n"));
    assert!(out.contains("  Total = 37.5\n"));
}

#[test]
fn test_remove_unknown_code() {
    let (out, session) =
        run_session_with(&format!("{}R\n9999999999999\nT\n", BREAD), SessionConfig::default());

    assert!(out.contains("Product Not Found in Cart\n"));
    assert_eq!(session.cart().len(), 1);
}

#[test]
fn test_remove_reprompts_until_valid_code() {
    let out = run_session(&format!("{}R\nbread\n123\n1234567890123\nE\nT\n", BREAD));

    assert_eq!(
        out.matches("Insert its EAN code (must be a 13 digit sequence): ")
            .count(),
        3
    );
    assert!(out.contains("Product Successfully Removed\n"));
    assert!(exported(&out).is_empty());
}

#[test]
fn test_removed_code_can_be_reused() {
    let script = format!("{}R\n1234567890123\n{}E\nT\n", BREAD, BREAD);
    let (out, session) = run_session_with(&script, SessionConfig::default());

    assert!(!out.contains("EAN code already added"));
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.registry().len(), 1);
}

#[test]
fn test_duplicate_code_is_rejected() {
    let second = "A\nFood\nRolls\n1.0\n6\n1234567890123\n7777777777777\nAcme\n2030-02-01\ny\ny\n";
    let (out, session) =
        run_session_with(&format!("{}{}E\nT\n", BREAD, second), SessionConfig::default());

    assert_eq!(
        out.matches("EAN code already added. Enter a UNIQUE code.").count(),
        1
    );
    assert_eq!(session.cart().len(), 2);

    let ids: Vec<u64> = exported(&out)
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1234567890123, 7777777777777]);
}

#[test]
fn test_change_quantity() {
    let script = format!("{}Q\n1234567890123\nmany\n5\nS\nE\nT\n", BREAD);
    let out = run_session(&script);

    assert!(out.contains("Product's Quantity Successfully Changed\n"));
    assert!(out.contains("   1 - 5 * 2.5 = 12.5\n"));

    let bread = &exported(&out)[0];
    assert_eq!(bread["quantity"], 5);
    assert_eq!(bread["price"], 2.5);
    assert_eq!(bread["expiry_date"], "2030-01-31");
}

#[test]
fn test_change_quantity_unknown_code() {
    let out = run_session(&format!("{}Q\n9999999999999\nT\n", BREAD));

    assert!(out.contains("Product Not Found in Cart\n"));
    assert!(!out.contains("Enter quantity"));
}

#[test]
fn test_unknown_category_adds_nothing() {
    let toys = "A\nToys\nBall\n1.0\n1\n1234567890123\nAcme\n";
    let (out, session) =
        run_session_with(&format!("{}{}E\nT\n", toys, BREAD), SessionConfig::default());

    assert!(out.contains("Type of product not found\n"));
    assert!(!out.contains("Command not recognised"));
    assert!(!out.contains("EAN code already added"));
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.registry().len(), 1);

    let products = exported(&out);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Bread");
    assert_eq!(products[0]["id"], 1234567890123u64);
}

#[test]
fn test_negative_quantity_is_accepted() {
    let script = format!("{}Q\n1234567890123\n-2\nS\nE\nT\n", BREAD);
    let out = run_session(&script);

    assert!(out.contains("   1 - -2 * 2.5 = -5.0\n"));
    assert!(out.contains("  Total = -5.0\n"));
    assert_eq!(exported(&out)[0]["quantity"], -2);
}

#[test]
fn test_fractional_prices_sum_exactly() {
    let script = "A\nClothing\nSticker\n0.1\n3\n2222222222222\nAcme\nS\nPaper\nS\nT\n";
    let out = run_session(script);

    assert!(out.contains("   1 - 3 * 0.1 = 0.3\n"));
    assert!(out.contains("  Total = 0.3\n"));
}

#[test]
fn test_bad_date_and_flags_reprompt() {
    let script = "A\nFood\nMilk\n1.2\n1\n1111111111116\nDairy\n2030-13-01\n2030-12-01\nmaybe\ny\nN\nn\nE\nT\n";
    let out = run_session(script);

    assert_eq!(out.matches("Insert its expiry_date").count(), 2);
    let milk = &exported(&out)[0];
    assert_eq!(milk["expiry_date"], "2030-12-01");
    assert_eq!(milk["gluten_free"], "y");
    assert_eq!(milk["suitable_for_vegetarians"], "n");
}
