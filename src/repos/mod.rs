pub mod recipe_repo;
