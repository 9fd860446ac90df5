mod catalog;
mod config;
mod errors;
mod models;
mod store;
mod wizard;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::templates::TemplateCategory;
use crate::config::Config;
use crate::store::JsonFileStore;
use crate::wizard::experience::{self, ExperienceField};
use crate::wizard::preview::{MarkdownPreview, PreviewHandle};
use crate::wizard::style::{ColorChannel, StyleEditor};
use crate::wizard::WizardController;

fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV builder wizard v{}", env!("CARGO_PKG_VERSION"));
    info!("Draft path: {}", config.draft_path.display());

    let store = JsonFileStore::new(&config.draft_path);
    let mut controller = WizardController::new(Box::new(store));
    let (sink, preview) = MarkdownPreview::new();
    controller.attach_preview(Box::new(sink));
    let mut style = StyleEditor::new();

    println!("CV builder — type `help` for commands.");
    print_position(&controller);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !dispatch(&mut controller, &mut style, &preview, line.trim()) {
            break;
        }
        prompt()?;
    }

    info!("Draft saved to {} — bye", config.draft_path.display());
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Handles one command line. Returns `false` to exit the loop.
fn dispatch(
    controller: &mut WizardController,
    style: &mut StyleEditor,
    preview: &PreviewHandle,
    line: &str,
) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return false,
        ["help"] => print_help(),
        ["show"] => print_position(controller),
        ["steps"] => {
            for (i, title) in controller.step_titles().iter().enumerate() {
                let marker = if i + 1 == controller.current_step() { "➤" } else { " " };
                println!("{marker} {}. {title}", i + 1);
            }
        }
        ["next"] => {
            if controller.advance() {
                print_position(controller);
            } else {
                println!("cannot continue from this step");
            }
        }
        ["back"] => {
            if controller.back() {
                print_position(controller);
            } else {
                println!("already on the first step");
            }
        }
        ["goto", n] => match n.parse::<usize>() {
            Ok(n) => {
                controller.go_to_step(n);
                print_position(controller);
            }
            Err(_) => println!("usage: goto <step-number>"),
        },
        ["templates", rest @ ..] => {
            let (query, category) = match rest {
                [first, ..] if TemplateCategory::parse(first).is_some() => {
                    (rest[1..].join(" "), TemplateCategory::parse(first))
                }
                _ => (rest.join(" "), None),
            };
            for t in catalog::search_templates(&query, category) {
                println!("{:>6}  {:<12} [{}] {}", t.id, t.title, t.category.label(), t.description);
            }
        }
        ["template", id] => {
            report(controller.edit(|doc| style.select_template(doc, id)), "unknown template id");
        }
        ["fonts"] => {
            for f in catalog::fonts::FONTS {
                println!("{:>15}  {}", f.id, f.name);
            }
        }
        ["font", id] => {
            report(controller.edit(|doc| style.select_font(doc, id)), "unknown font id");
        }
        ["colors"] => {
            for s in catalog::colors::COLOR_SCHEMES {
                println!("{:>10}  {} {} {}", s.id, s.primary, s.secondary, s.accent);
            }
            println!("{:>10}  (your own colors)", catalog::CUSTOM_SCHEME_ID);
        }
        ["colors", id] => {
            report(
                controller.edit(|doc| style.select_color_preset(doc, id)),
                "unknown color scheme",
            );
        }
        ["color", channel, value] => match ColorChannel::parse(channel) {
            Some(channel) => {
                controller.edit(|doc| style.set_custom_color(doc, channel, value));
            }
            None => println!("usage: color <primary|secondary|accent> <#rrggbb>"),
        },
        ["spacing"] => {
            for s in catalog::spacing::SPACING_PRESETS {
                println!("{:>10}  {}x", s.id, s.multiplier);
            }
        }
        ["spacing", id] => {
            report(controller.edit(|doc| style.select_spacing(doc, id)), "unknown spacing preset");
        }
        ["set", field, rest @ ..] => {
            let value = rest.join(" ");
            let applied = controller.edit(|doc| match *field {
                "name" => {
                    doc.name = value.clone();
                    true
                }
                "email" => {
                    doc.email = value.clone();
                    true
                }
                "phone" => {
                    doc.phone = value.clone();
                    true
                }
                "track" => {
                    doc.cv_track = value.clone();
                    true
                }
                _ => false,
            });
            report(applied, "usage: set <name|email|phone|track> <value>");
        }
        ["exp", "add"] => {
            let id = controller.edit(experience::add_experience);
            let position = controller.document().experience.len();
            println!("added experience #{position} ({id})");
        }
        ["exp", "rm", n] => {
            let applied = resolve_experience(controller, n)
                .map(|id| controller.edit(|doc| experience::remove_experience(doc, id)))
                .unwrap_or(false);
            report(applied, "no such experience entry");
        }
        ["exp", "set", n, field, rest @ ..] => {
            let value = rest.join(" ");
            let applied = match (resolve_experience(controller, n), field.parse::<ExperienceField>()) {
                (Some(id), Ok(field)) => {
                    controller.edit(|doc| experience::update_field(doc, id, field, &value))
                }
                _ => false,
            };
            report(
                applied,
                "usage: exp set <n> <title|company|location|start|end|description> <value>",
            );
        }
        ["ach", "add", n] => {
            let applied = resolve_experience(controller, n)
                .map(|id| controller.edit(|doc| experience::add_achievement(doc, id)))
                .unwrap_or(false);
            report(applied, "no such experience entry");
        }
        ["ach", "set", n, index, rest @ ..] => {
            let value = rest.join(" ");
            let applied = match (resolve_experience(controller, n), index.parse::<usize>()) {
                (Some(id), Ok(index)) => controller
                    .edit(|doc| experience::update_achievement(doc, id, index, &value)),
                _ => false,
            };
            report(applied, "usage: ach set <n> <index> <text>");
        }
        ["ach", "rm", n, index] => {
            let applied = match (resolve_experience(controller, n), index.parse::<usize>()) {
                (Some(id), Ok(index)) => {
                    controller.edit(|doc| experience::remove_achievement(doc, id, index))
                }
                _ => false,
            };
            report(applied, "no such achievement");
        }
        ["preview"] => print!("{}", preview.latest_or_render(controller.document())),
        _ => println!("unknown command — type `help`"),
    }
    true
}

/// Resolves a 1-based CLI position to the entry's id.
fn resolve_experience(controller: &WizardController, n: &str) -> Option<uuid::Uuid> {
    let position: usize = n.parse().ok()?;
    controller
        .document()
        .experience
        .get(position.checked_sub(1)?)
        .map(|e| e.id)
}

fn report(applied: bool, rejection: &str) {
    if !applied {
        println!("{rejection}");
    }
}

fn print_position(controller: &WizardController) {
    let doc = controller.document();
    println!(
        "step {}/{} — {} | template {} · font {} · spacing {} | {} experience entries{}",
        controller.current_step(),
        controller.total_steps(),
        controller.step_title(),
        doc.layout,
        doc.font,
        doc.spacing,
        doc.experience.len(),
        if controller.can_continue() { "" } else { " | continue disabled" },
    );
}

fn print_help() {
    println!(
        "navigation:  steps · next · back · goto <n> · show\n\
         style:       templates [category] [query] · template <id> · fonts · font <id>\n\
         \u{20}            colors [<id>] · color <channel> <#rrggbb> · spacing [<id>]\n\
         personal:    set <name|email|phone|track> <value>\n\
         experience:  exp add · exp rm <n> · exp set <n> <field> <value>\n\
         \u{20}            ach add <n> · ach set <n> <index> <text> · ach rm <n> <index>\n\
         other:       preview · quit"
    );
}
