//! Console presentation layer for the annotation canvas.
//!
//! A line-oriented REPL standing in for the graphical front end: it owns
//! the ephemeral drag gesture state, supplies placement coordinates and
//! random styling for new annotations, and feeds every state change
//! through the core's message/update cycle.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use placard::debug_dump::dump_json;
use placard::messages::Msg;
use placard::model::{AnnotationId, CanvasModel, Color, FontFamily, StylePatch};
use placard::update::update;
use placard::util::{random_color, random_font_family};

use cli::CliArgs;

/// Default font size for newly placed annotations
const DEFAULT_FONT_SIZE: f32 = 16.0;

const HELP: &str = "\
commands:
  add <text>            place text at the viewport center
  select <id> | none    select an annotation (or clear selection)
  edit content <text>   change the selected annotation's text
  edit size <n>         change its font size
  edit color <#hex>     change its color
  edit font <family>    change its font (Arial, Courier New, Georgia,
                        Times New Roman, Verdana)
  grab <id>             start dragging an annotation
  move <x> <y>          reposition while a drag is active
  release               end the drag
  undo / redo           walk the edit history
  list                  show the canvas
  dump                  JSON state dump
  quit";

fn main() -> Result<()> {
    placard::tracing::init();
    let args = CliArgs::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut model = CanvasModel::new();
    // Two-state drag gate: idle / dragging an id. Owned here, not by the
    // core; a `move` outside an active grab never reaches the model.
    let mut dragging: Option<AnnotationId> = None;

    if !args.quiet {
        println!(
            "placard - {}x{} canvas. Type 'help' for commands.",
            args.width, args.height
        );
    }

    let stdin = io::stdin();
    loop {
        if !args.quiet {
            print!("> ");
            io::stdout().flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let msg = match command {
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "list" => {
                render(&model);
                continue;
            }
            "dump" => {
                println!("{}", dump_json(&model)?);
                continue;
            }
            "add" => {
                // Same guard as the input form: blank text never reaches
                // the store.
                if rest.trim().is_empty() {
                    println!("nothing to add: text is empty");
                    continue;
                }
                Msg::add_text(
                    rest,
                    args.width / 2.0,
                    args.height / 2.0,
                    DEFAULT_FONT_SIZE,
                    random_color(&mut rng),
                    random_font_family(&mut rng),
                )
            }
            "select" => match parse_selection(rest, &model) {
                Ok(id) => Msg::select(id),
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            "edit" => match parse_patch(rest) {
                Ok(patch) => {
                    if model.selected_id().is_none() {
                        println!("nothing selected");
                        continue;
                    }
                    Msg::update_selected(patch)
                }
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            "grab" => {
                match parse_id(rest) {
                    Ok(id) if model.annotations().iter().any(|a| a.id == id) => {
                        dragging = Some(id);
                        println!("dragging {id}");
                    }
                    Ok(id) => println!("no annotation with id {id}"),
                    Err(e) => println!("{e}"),
                }
                continue;
            }
            "move" => match dragging {
                Some(id) => match parse_point(rest) {
                    Ok((x, y)) => Msg::drag(id, x, y),
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                },
                None => {
                    // Pointer released (or never pressed): positional
                    // updates are rejected.
                    println!("no active drag; use 'grab <id>' first");
                    continue;
                }
            },
            "release" => {
                dragging = None;
                continue;
            }
            "undo" => Msg::undo(),
            "redo" => Msg::redo(),
            other => {
                println!("unknown command '{other}'; type 'help'");
                continue;
            }
        };

        if update(&mut model, msg).is_some() {
            render(&model);
        } else {
            println!("(no change)");
        }
    }

    Ok(())
}

/// Print the canvas in z-order with the selection marked
fn render(model: &CanvasModel) {
    if model.annotations().is_empty() {
        println!("(empty canvas)");
    }
    for a in model.annotations() {
        let marker = if model.selected_id() == Some(a.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker}[{}] {:?} at ({:.0}, {:.0}) {}px {} {}",
            a.id, a.content, a.x, a.y, a.font_size, a.color, a.font_family
        );
    }
    println!(
        "undo: {}  redo: {}",
        if model.can_undo() { "yes" } else { "no" },
        if model.can_redo() { "yes" } else { "no" },
    );
}

fn parse_id(s: &str) -> Result<AnnotationId, String> {
    s.trim()
        .parse::<u64>()
        .map(AnnotationId)
        .map_err(|_| format!("expected an annotation id, got '{s}'"))
}

fn parse_selection(s: &str, model: &CanvasModel) -> Result<Option<AnnotationId>, String> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let id = parse_id(s)?;
    if !model.annotations().iter().any(|a| a.id == id) {
        return Err(format!("no annotation with id {id}"));
    }
    Ok(Some(id))
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let mut parts = s.split_whitespace();
    let parse = |part: Option<&str>| {
        part.and_then(|p| p.parse::<f32>().ok())
            .ok_or_else(|| format!("expected 'move <x> <y>', got '{s}'"))
    };
    let x = parse(parts.next())?;
    let y = parse(parts.next())?;
    Ok((x, y))
}

fn parse_patch(s: &str) -> Result<StylePatch, String> {
    let (field, value) = s
        .split_once(char::is_whitespace)
        .map(|(f, v)| (f, v.trim()))
        .ok_or_else(|| "expected 'edit <field> <value>'".to_string())?;
    match field {
        "content" | "text" => {
            if value.trim().is_empty() {
                return Err("content cannot be blank".to_string());
            }
            Ok(StylePatch::content(value))
        }
        "size" => {
            let size: f32 = value
                .parse()
                .map_err(|_| format!("expected a number, got '{value}'"))?;
            if !size.is_finite() || size <= 0.0 {
                return Err(format!("font size must be positive, got {value}"));
            }
            Ok(StylePatch::font_size(size))
        }
        "color" => Color::from_hex(value)
            .map(StylePatch::color)
            .map_err(|e| e.to_string()),
        "font" => value
            .parse::<FontFamily>()
            .map(StylePatch::font_family)
            .map_err(|e| e.to_string()),
        other => Err(format!(
            "unknown field '{other}'; expected content, size, color or font"
        )),
    }
}
