use crate::{pantry::IngredientList, recipes::Recipe, session::SessionState};
use std::io::{self, Write};

pub fn render_ingredients(w: &mut impl Write, ingredients: &IngredientList) -> io::Result<()> {
    if ingredients.is_empty() {
        return writeln!(w, "Your pantry is empty. Add something with: add <name>");
    }
    write!(w, "Your ingredients:")?;
    for name in ingredients.iter() {
        write!(w, " [{}]", name)?;
    }
    writeln!(w)
}

/// Renders exactly one of: idle placeholder, loading line, error banner,
/// recipe cards.
pub fn render_state(w: &mut impl Write, state: &SessionState) -> io::Result<()> {
    match state {
        SessionState::Idle => render_placeholder(w),
        SessionState::Loading => writeln!(w, "Generating delicious ideas..."),
        SessionState::Error(message) => render_error(w, message),
        SessionState::Success(recipes) => render_recipes(w, recipes),
    }
}

fn render_placeholder(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "Ready to cook?")?;
    writeln!(
        w,
        "Add your ingredients and run 'cook' to discover what you can make!"
    )
}

fn render_error(w: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(w, "Error: {}", message)
}

fn render_recipes(w: &mut impl Write, recipes: &[Recipe]) -> io::Result<()> {
    writeln!(w, "Recipe Suggestions")?;
    writeln!(w, "==================")?;
    for recipe in recipes {
        writeln!(w)?;
        render_recipe(w, recipe)?;
    }
    Ok(())
}

pub fn render_recipe(w: &mut impl Write, recipe: &Recipe) -> io::Result<()> {
    writeln!(w, "{}", recipe.recipe_name)?;
    writeln!(w, "{}", "-".repeat(recipe.recipe_name.len()))?;
    writeln!(w, "{}", recipe.description)?;
    writeln!(w)?;

    writeln!(w, "  Ingredients:")?;
    for ingredient in &recipe.ingredients {
        let marker = if ingredient.user_has { "[x]" } else { "[ ]" };
        writeln!(
            w,
            "    {} {} {}",
            marker, ingredient.quantity, ingredient.name
        )?;
    }

    writeln!(w, "  Instructions:")?;
    for (i, step) in recipe.instructions.iter().enumerate() {
        writeln!(w, "    {}. {}", i + 1, step)?;
    }
    Ok(())
}
