//! Registration form demo
//!
//! Replays a short user session against the bundled sign-up form, printing
//! each render command the engine issues and the payload that would be sent.
//!
//! Run with: `cargo run -p rusty-forms --example registration`

use anyhow::Result;
use rusty_forms::{
    Anchor, FieldId, FieldValues, FormConfig, FormController, FormSnapshot, RenderSurface,
    Summary, Trigger,
};

/// Prints render commands instead of touching a real page
struct ConsoleSurface;

impl RenderSurface for ConsoleSurface {
    fn render_error(&mut self, target: &FieldId, anchor: Anchor, message: &str) {
        println!("  [{:?} {}] error: {}", anchor, target, message);
    }

    fn render_success(&mut self, target: &FieldId) {
        println!("  [Field {}] ok", target);
    }

    fn clear_annotation(&mut self, target: &FieldId, anchor: Anchor) {
        println!("  [{:?} {}] annotation cleared", anchor, target);
    }

    fn render_summary(&mut self, summary: &Summary) {
        println!("  <output {:?}> {}", summary.tone, summary.text);
    }
}

fn send(snapshot: &FormSnapshot) -> Result<()> {
    println!("  => POST {}", serde_json::to_string(snapshot)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = FormConfig::load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/forms/registration.toml"
    ))?;
    let mut form = FormController::new(&config, FieldValues::new(), ConsoleSurface, send)?;

    let fname = FieldId::new("fname");

    println!("user types 'Al' into the name and tabs away");
    form.values_mut().set("fname", "Al");
    form.handle(Trigger::Exit(fname.clone()))?;

    println!("user keeps typing");
    form.values_mut().set("fname", "Ali");
    form.handle(Trigger::ValueChanged(fname))?;

    println!("user fills the rest but forgets gender, then submits");
    form.values_mut()
        .set("email", "ali@mail.com")
        .set("age", "17")
        .set("country", "Canada");
    form.handle(Trigger::SubmitAttempted)?;

    println!("user fixes age and picks a gender");
    form.values_mut().set("age", "25").select("gender", "female");
    form.handle(Trigger::Exit(FieldId::new("age")))?;
    form.handle(Trigger::SelectionChanged(FieldId::new("gender")))?;

    println!("user submits again");
    if let Some(report) = form.handle(Trigger::SubmitAttempted)? {
        println!("decision: {:?}", report.decision);
    }

    Ok(())
}
