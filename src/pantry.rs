//! Ingredient gap matcher - what a recipe needs that the pantry lacks
//!
//! Matching is fuzzy on purpose: pantry entries are free text, so an
//! ingredient counts as present when either name contains the other.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::calibration::NutritionTargets;

/// Pantry entry: a bare name is always present, a flagged entry only when
/// `isPresent` is set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InventoryItem {
    Name(String),
    Flagged {
        name: String,
        #[serde(rename = "isPresent", default)]
        is_present: bool,
    },
}

impl InventoryItem {
    pub fn name(&self) -> &str {
        match self {
            InventoryItem::Name(name) | InventoryItem::Flagged { name, .. } => name,
        }
    }

    pub fn is_present(&self) -> bool {
        match self {
            InventoryItem::Name(_) => true,
            InventoryItem::Flagged { is_present, .. } => *is_present,
        }
    }
}

impl From<&str> for InventoryItem {
    fn from(name: &str) -> Self {
        InventoryItem::Name(name.to_string())
    }
}

/// Recipe as returned by the recipe search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub macros: NutritionTargets,
}

/// Recipe paired with its missing ingredients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedRecipe<'r> {
    pub recipe: &'r Recipe,
    pub missing: Vec<String>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Lowercase names of present items. Blank names are dropped: an empty
/// string would match every ingredient.
fn present_names(inventory: &[InventoryItem]) -> Vec<String> {
    let mut names: Vec<String> = inventory
        .iter()
        .filter(|item| item.is_present())
        .map(|item| normalize(item.name()))
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

fn matches_any(ingredient: &str, pantry: &[String]) -> bool {
    pantry
        .iter()
        .any(|item| ingredient.contains(item.as_str()) || item.contains(ingredient))
}

fn gaps_against(pantry: &[String], recipe: &Recipe) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut missing = Vec::new();

    for ingredient in &recipe.ingredients {
        let key = normalize(ingredient);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if !matches_any(&key, pantry) {
            missing.push(ingredient.trim().to_string());
        }
    }

    missing
}

/// Recipe ingredients with no bidirectional substring match in the pantry.
///
/// Deduplicated case-insensitively, in order of first appearance. Blank
/// ingredients name nothing to buy and are never reported.
pub fn gaps(inventory: &[InventoryItem], recipe: &Recipe) -> Vec<String> {
    gaps_against(&present_names(inventory), recipe)
}

/// Recipes ordered by ascending gap count; ties keep input order
pub fn rank_recipes<'r>(inventory: &[InventoryItem], recipes: &'r [Recipe]) -> Vec<RankedRecipe<'r>> {
    let pantry = present_names(inventory);
    let mut ranked: Vec<RankedRecipe<'r>> = recipes
        .iter()
        .map(|recipe| RankedRecipe {
            recipe,
            missing: gaps_against(&pantry, recipe),
        })
        .collect();
    ranked.sort_by_key(|r| r.missing.len());
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            title: title.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            macros: NutritionTargets::default(),
        }
    }

    fn pantry(items: &[&str]) -> Vec<InventoryItem> {
        items.iter().map(|&s| InventoryItem::from(s)).collect()
    }

    #[test]
    fn test_everything_present() {
        let r = recipe("Omelette", &["eggs", "butter", "salt"]);
        assert!(gaps(&pantry(&["Eggs", "butter", "salt"]), &r).is_empty());
    }

    #[test]
    fn test_missing_in_recipe_order() {
        let r = recipe("Stir fry", &["rice", "soy sauce", "broccoli", "ginger"]);
        assert_eq!(gaps(&pantry(&["rice"]), &r), vec!["soy sauce", "broccoli", "ginger"]);
    }

    #[test]
    fn test_bidirectional_substring() {
        let r = recipe("Salad", &["chicken breast", "olive oil"]);
        // pantry name inside ingredient
        assert!(gaps(&pantry(&["chicken", "olive oil"]), &r).is_empty());
        // ingredient inside pantry name
        let r2 = recipe("Wrap", &["chicken"]);
        assert!(gaps(&pantry(&["chicken breast"]), &r2).is_empty());
    }

    #[test]
    fn test_dedup_case_insensitive() {
        let r = recipe("Pancakes", &["Flour", "milk", "flour", "MILK", "eggs"]);
        assert_eq!(gaps(&pantry(&["eggs"]), &r), vec!["Flour", "milk"]);
    }

    #[test]
    fn test_flagged_items_respect_presence() {
        let inventory = vec![
            InventoryItem::Flagged { name: "oats".to_string(), is_present: true },
            InventoryItem::Flagged { name: "banana".to_string(), is_present: false },
        ];
        let r = recipe("Porridge", &["oats", "banana"]);
        assert_eq!(gaps(&inventory, &r), vec!["banana"]);
    }

    #[test]
    fn test_blank_pantry_name_matches_nothing() {
        let r = recipe("Toast", &["bread"]);
        assert_eq!(gaps(&pantry(&["", "   "]), &r), vec!["bread"]);
    }

    #[test]
    fn test_blank_ingredient_never_a_gap() {
        let r = recipe("Typo", &["", "  ", "lentils"]);
        assert_eq!(gaps(&pantry(&[]), &r), vec!["lentils"]);
        assert!(gaps(&pantry(&[]), &recipe("Blank", &[""])).is_empty());
    }

    #[test]
    fn test_empty_recipe_has_no_gaps() {
        assert!(gaps(&pantry(&[]), &recipe("Air", &[])).is_empty());
    }

    #[test]
    fn test_rank_stable_by_gap_count() {
        let recipes = vec![
            recipe("A", &["tofu", "rice", "kale"]),
            recipe("B", &["rice"]),
            recipe("C", &["rice", "kale"]),
            recipe("D", &["beans"]),
        ];
        let ranked = rank_recipes(&pantry(&["rice"]), &recipes);
        let titles: Vec<_> = ranked.iter().map(|r| r.recipe.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C", "D", "A"]);
        assert_eq!(ranked[0].missing.len(), 0);
        assert_eq!(ranked[3].missing, vec!["tofu", "kale"]);
    }

    #[test]
    fn test_inventory_json_shapes() {
        let json = r#"["eggs", {"name": "milk", "isPresent": false}, {"name": "oats", "isPresent": true}]"#;
        let items: Vec<InventoryItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0], InventoryItem::Name("eggs".to_string()));
        assert!(!items[1].is_present());
        assert!(items[2].is_present());
        assert_eq!(items[2].name(), "oats");
    }
}
