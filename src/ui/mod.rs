mod render;

pub use render::{render_ingredients, render_recipe, render_state};

use crate::{
    Result,
    config::Config,
    llm::GeminiClient,
    pantry::IngredientList,
    recipes::RecipeService,
    session::Session,
};
use std::io::Write;
use tokio::io::AsyncBufReadExt;
use tracing::{error, info};

/// Runs the interactive loop until EOF or `quit`.
pub async fn run(config: Config) -> Result<()> {
    let client = GeminiClient::new(config.llm)?;
    let service = RecipeService::new(Box::new(client));

    // Starter pantry for a fresh session.
    let mut session = Session::with_ingredients(IngredientList::from_names([
        "Tomatoes",
        "Chicken Breast",
        "Garlic",
    ]));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "PantryChef: recipe ideas from what you have on hand.")?;
    writeln!(
        out,
        "Commands: add <name>, remove <name>, list, cook, help, quit"
    )?;
    render_ingredients(&mut out, &session.ingredients)?;
    render_state(&mut out, session.state())?;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "add" => {
                session.ingredients.add(rest);
                render_ingredients(&mut out, &session.ingredients)?;
            }
            "remove" | "rm" => {
                session.ingredients.remove(rest);
                render_ingredients(&mut out, &session.ingredients)?;
            }
            "list" => render_ingredients(&mut out, &session.ingredients)?,
            "cook" | "generate" => generate(&service, &mut session, &mut out).await?,
            "help" => {
                writeln!(out, "  add <name>     add an ingredient to your pantry")?;
                writeln!(out, "  remove <name>  remove an ingredient")?;
                writeln!(out, "  list           show the pantry")?;
                writeln!(out, "  cook           generate recipe suggestions")?;
                writeln!(out, "  quit           exit")?;
            }
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command: {}. Try 'help'.", other)?,
        }
    }

    info!("Session ended");
    Ok(())
}

/// One generation cycle: Loading, then Success or Error. The request is
/// awaited inline, so a second generation cannot start while this one is
/// outstanding.
async fn generate(
    service: &RecipeService,
    session: &mut Session,
    out: &mut impl Write,
) -> Result<()> {
    if let Err(e) = session.begin_generation() {
        session.fail(e.user_message())?;
        render_state(out, session.state())?;
        return Ok(());
    }

    render_state(out, session.state())?;
    out.flush()?;

    match service.generate(&session.ingredients).await {
        Ok(recipes) => session.complete(recipes)?,
        Err(e) => {
            error!("Recipe generation failed: {}", e);
            session.fail(e.user_message())?;
        }
    }

    render_state(out, session.state())?;
    Ok(())
}
