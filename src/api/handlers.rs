use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Difficulty, Favourite, MealType, Recipe};
use crate::services::{aggregate, build, classify, parse, AggregateSummary, FilterCriteria};

use super::AppState;

/// Longest accepted recipe name
const MAX_NAME_LEN: usize = 50;

/// Preparation time assumed when the client does not supply one
const DEFAULT_PREP_TIME: i64 = 5;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    pub ingredients: String,
    pub prep_time: Option<i64>,
    pub cooking_time: i64,
    pub meal_type: Option<MealType>,
    pub owner: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub ingredients: String,
    /// Parsed display list derived from the raw ingredients text
    pub ingredient_list: Vec<String>,
    pub ingredient_count: usize,
    pub prep_time: u32,
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub meal_type: MealType,
    pub owner: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        let parsed = parse(&recipe.ingredients);
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            instructions: recipe.instructions.clone(),
            ingredients: recipe.ingredients.clone(),
            ingredient_list: parsed.items,
            ingredient_count: parsed.count,
            prep_time: recipe.prep_time,
            cooking_time: recipe.cooking_time,
            difficulty: recipe.difficulty,
            meal_type: recipe.meal_type,
            owner: recipe.owner,
            created_at: recipe.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuickSearchParams {
    /// Name substring; empty means no constraint
    #[serde(default)]
    pub q: String,
    /// Meal type; "all" (the header form's default) means no constraint
    pub meal_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdvancedSearchResponse {
    pub recipes: Vec<RecipeResponse>,
    pub summary: AggregateSummary,
}

#[derive(Debug, Deserialize)]
pub struct FavouriteRequest {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}

/// Validates a recipe payload and derives its difficulty.
///
/// The difficulty field is never taken from the client; it is recomputed
/// here on every create and update.
fn build_recipe(id: Uuid, created_at: DateTime<Utc>, request: RecipeRequest) -> AppResult<Recipe> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::InvalidInput("recipe name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "recipe name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }

    let prep_time = request.prep_time.unwrap_or(DEFAULT_PREP_TIME);
    if prep_time < 0 {
        return Err(AppError::InvalidInput(format!(
            "prep time must be non-negative, got {}",
            prep_time
        )));
    }

    let parsed = parse(&request.ingredients);
    let difficulty = classify(request.cooking_time, parsed.count as i64)?;

    // The stored record must hold exactly the values the difficulty was
    // derived from, so out-of-range times are rejected rather than wrapped
    let prep_time = u32::try_from(prep_time).map_err(|_| {
        AppError::InvalidInput(format!(
            "prep time must be at most {} minutes, got {}",
            u32::MAX,
            prep_time
        ))
    })?;
    let cooking_time = u32::try_from(request.cooking_time).map_err(|_| {
        AppError::InvalidInput(format!(
            "cooking time must be at most {} minutes, got {}",
            u32::MAX,
            request.cooking_time
        ))
    })?;

    Ok(Recipe {
        id,
        name,
        description: request.description,
        instructions: request.instructions,
        ingredients: request.ingredients,
        prep_time,
        cooking_time,
        difficulty,
        meal_type: request.meal_type.unwrap_or(MealType::Dinner),
        owner: request.owner,
        created_at,
    })
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get all recipes, oldest first
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<RecipeResponse>> {
    let inner = state.inner.read().await;
    let mut recipes: Vec<&Recipe> = inner.recipes.values().collect();
    recipes.sort_by_key(|recipe| recipe.created_at);
    let responses: Vec<RecipeResponse> = recipes.into_iter().map(RecipeResponse::from).collect();
    Json(responses)
}

/// Create a new recipe
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> AppResult<(StatusCode, Json<RecipeResponse>)> {
    let recipe = build_recipe(Uuid::new_v4(), Utc::now(), request)?;
    let response = RecipeResponse::from(&recipe);

    let mut inner = state.inner.write().await;
    inner.recipes.insert(recipe.id, recipe);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a single recipe with its parsed ingredient list
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RecipeResponse>> {
    let inner = state.inner.read().await;
    let recipe = inner
        .recipes
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("recipe {} not found", id)))?;
    Ok(Json(RecipeResponse::from(recipe)))
}

/// Replace a recipe; difficulty is recomputed from the new payload
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecipeRequest>,
) -> AppResult<Json<RecipeResponse>> {
    let mut inner = state.inner.write().await;
    let created_at = inner
        .recipes
        .get(&id)
        .map(|existing| existing.created_at)
        .ok_or_else(|| AppError::NotFound(format!("recipe {} not found", id)))?;

    let recipe = build_recipe(id, created_at, request)?;
    let response = RecipeResponse::from(&recipe);
    inner.recipes.insert(id, recipe);

    Ok(Json(response))
}

/// Delete a recipe and any favourites pointing at it
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    if inner.recipes.remove(&id).is_none() {
        return Err(AppError::NotFound(format!("recipe {} not found", id)));
    }
    inner.favourites.retain(|favourite| favourite.recipe_id != id);
    Ok(StatusCode::NO_CONTENT)
}

/// Header quick search: name substring plus optional meal type
pub async fn quick_search(
    State(state): State<AppState>,
    Query(params): Query<QuickSearchParams>,
) -> Json<Vec<RecipeResponse>> {
    let criteria = FilterCriteria {
        title: (!params.q.is_empty()).then(|| params.q.clone()),
        meal_type: params.meal_type.clone(),
        ..FilterCriteria::default()
    };
    let predicate = build(&criteria);

    let inner = state.inner.read().await;
    let mut matched: Vec<&Recipe> = inner
        .recipes
        .values()
        .filter(|recipe| predicate.matches(recipe))
        .collect();
    matched.sort_by_key(|recipe| recipe.created_at);
    let responses: Vec<RecipeResponse> = matched.into_iter().map(RecipeResponse::from).collect();
    Json(responses)
}

/// Advanced search: full criteria, returning matches plus the aggregate
/// summary that feeds the results table and charts
pub async fn advanced_search(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<AdvancedSearchResponse> {
    let predicate = build(&criteria);

    let inner = state.inner.read().await;
    let mut matched: Vec<Recipe> = inner
        .recipes
        .values()
        .filter(|recipe| predicate.matches(recipe))
        .cloned()
        .collect();
    matched.sort_by_key(|recipe| recipe.created_at);

    let summary = aggregate(&matched);
    let recipes: Vec<RecipeResponse> = matched.iter().map(RecipeResponse::from).collect();

    Json(AdvancedSearchResponse { recipes, summary })
}

/// Bookmark a recipe for a user; adding an existing favourite is a no-op
pub async fn add_favourite(
    State(state): State<AppState>,
    Json(request): Json<FavouriteRequest>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    if !inner.recipes.contains_key(&request.recipe_id) {
        return Err(AppError::NotFound(format!(
            "recipe {} not found",
            request.recipe_id
        )));
    }

    let favourite = Favourite {
        user_id: request.user_id,
        recipe_id: request.recipe_id,
    };
    if !inner.favourites.contains(&favourite) {
        inner.favourites.push(favourite);
    }

    Ok(StatusCode::CREATED)
}

/// Remove a favourite if present
pub async fn remove_favourite(
    State(state): State<AppState>,
    Json(request): Json<FavouriteRequest>,
) -> StatusCode {
    let mut inner = state.inner.write().await;
    inner
        .favourites
        .retain(|f| !(f.user_id == request.user_id && f.recipe_id == request.recipe_id));
    StatusCode::NO_CONTENT
}

/// Get a user's favourite recipes in the order they were added
pub async fn list_favourites(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Json<Vec<RecipeResponse>> {
    let inner = state.inner.read().await;
    let responses: Vec<RecipeResponse> = inner
        .favourites
        .iter()
        .filter(|favourite| favourite.user_id == user_id)
        .filter_map(|favourite| inner.recipes.get(&favourite.recipe_id))
        .map(RecipeResponse::from)
        .collect();
    Json(responses)
}
