// ABOUTME: Integration tests for recipe and shopping cart storage
// ABOUTME: Covers uniqueness rules, cascading deletes, and the cart-backed shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodgram Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use foodgram_api::errors::ErrorCode;
use foodgram_api::models::{NewRecipe, NewRecipeIngredient, NewTag};
use foodgram_api::services::ShoppingList;

use common::{create_baking_cart, create_test_database, create_test_recipe, create_test_user, ingredient, BAKING_LIST};

#[tokio::test]
async fn test_cart_backed_shopping_list() {
    let db = create_test_database().await.unwrap();
    let cart = create_baking_cart(&db).await;

    let list = ShoppingList::for_user(&db, cart.user.id).await.unwrap();
    assert_eq!(list.render(), BAKING_LIST);
}

#[tokio::test]
async fn test_other_users_cart_is_separate() {
    let db = create_test_database().await.unwrap();
    let cart = create_baking_cart(&db).await;
    let guest = create_test_user(&db, "guest").await;

    db.add_to_shopping_cart(guest.id, cart.recipe_b.id).await.unwrap();

    let list = ShoppingList::for_user(&db, guest.id).await.unwrap();
    assert_eq!(list.render(), "Flour, 300, g\nSalt, 5, g\n");
}

#[tokio::test]
async fn test_empty_cart_renders_nothing() {
    let db = create_test_database().await.unwrap();
    let user = create_test_user(&db, "nobody").await;

    let list = ShoppingList::for_user(&db, user.id).await.unwrap();
    assert!(list.is_empty());
    assert_eq!(list.render(), "");
}

#[tokio::test]
async fn test_recipe_added_twice_is_rejected() {
    let db = create_test_database().await.unwrap();
    let cart = create_baking_cart(&db).await;

    let err = db
        .add_to_shopping_cart(cart.user.id, cart.recipe_a.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // The duplicate must not double the totals
    let list = ShoppingList::for_user(&db, cart.user.id).await.unwrap();
    assert_eq!(list.render(), BAKING_LIST);
}

#[tokio::test]
async fn test_adding_unknown_recipe_is_not_found() {
    let db = create_test_database().await.unwrap();
    let user = create_test_user(&db, "baker").await;

    let err = db.add_to_shopping_cart(user.id, 4242).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_remove_from_cart() {
    let db = create_test_database().await.unwrap();
    let cart = create_baking_cart(&db).await;

    assert!(db.is_in_shopping_cart(cart.user.id, cart.recipe_b.id).await.unwrap());
    assert!(db
        .remove_from_shopping_cart(cart.user.id, cart.recipe_b.id)
        .await
        .unwrap());
    assert!(!db.is_in_shopping_cart(cart.user.id, cart.recipe_b.id).await.unwrap());
    assert!(!db
        .remove_from_shopping_cart(cart.user.id, cart.recipe_b.id)
        .await
        .unwrap());

    let list = ShoppingList::for_user(&db, cart.user.id).await.unwrap();
    assert_eq!(list.render(), "Flour, 200, g\nSugar, 50, g\n");
}

#[tokio::test]
async fn test_cart_entries_keep_insertion_order() {
    let db = create_test_database().await.unwrap();
    let cart = create_baking_cart(&db).await;

    let entries = db.get_shopping_cart(cart.user.id).await.unwrap();
    let ids: Vec<i64> = entries.iter().map(|entry| entry.recipe_id).collect();
    assert_eq!(ids, [cart.recipe_a.id, cart.recipe_b.id]);
}

#[tokio::test]
async fn test_deleting_recipe_removes_its_contribution() {
    let db = create_test_database().await.unwrap();
    let cart = create_baking_cart(&db).await;

    assert!(db.delete_recipe(cart.recipe_a.id).await.unwrap());
    assert!(!db.recipe_exists(cart.recipe_a.id).await.unwrap());
    assert!(!db.is_in_shopping_cart(cart.user.id, cart.recipe_a.id).await.unwrap());

    let list = ShoppingList::for_user(&db, cart.user.id).await.unwrap();
    assert_eq!(list.render(), "Flour, 300, g\nSalt, 5, g\n");
    assert!(!db.delete_recipe(cart.recipe_a.id).await.unwrap());
}

#[tokio::test]
async fn test_recipe_round_trip_keeps_lines_and_tags() {
    let db = create_test_database().await.unwrap();
    let author = create_test_user(&db, "chef").await;
    let eggs = ingredient(&db, "Eggs", "pcs").await;
    let milk = ingredient(&db, "Milk", "ml").await;
    let breakfast = db.create_tag(&NewTag::new("Breakfast", "breakfast")).await.unwrap();
    let brunch = db.create_tag(&NewTag::new("Brunch", "brunch")).await.unwrap();

    let created = db
        .create_recipe(&NewRecipe {
            author_id: author.id,
            name: "Omelette".into(),
            text: "Whisk and fry".into(),
            cooking_time: 10,
            ingredients: vec![
                NewRecipeIngredient {
                    ingredient_id: milk.id,
                    amount: 50,
                },
                NewRecipeIngredient {
                    ingredient_id: eggs.id,
                    amount: 3,
                },
            ],
            tags: vec![brunch.id, breakfast.id],
        })
        .await
        .unwrap();

    let stored = db.get_recipe(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);

    let lines: Vec<(&str, u32)> = stored
        .ingredients
        .iter()
        .map(|line| (line.name.as_str(), line.amount))
        .collect();
    assert_eq!(lines, [("Milk", 50), ("Eggs", 3)]);

    let tags: Vec<&str> = stored.tags.iter().map(|tag| tag.slug.as_str()).collect();
    assert_eq!(tags, ["breakfast", "brunch"]);
}

#[tokio::test]
async fn test_duplicate_recipe_name_per_author_is_rejected() {
    let db = create_test_database().await.unwrap();
    let author = create_test_user(&db, "chef").await;
    let other = create_test_user(&db, "sous").await;
    let rice = ingredient(&db, "Rice", "g").await;

    create_test_recipe(&db, &author, "Pilaf", &[(&rice, 300)]).await;

    let again = NewRecipe {
        author_id: author.id,
        name: "Pilaf".into(),
        text: "Again".into(),
        cooking_time: 40,
        ingredients: vec![NewRecipeIngredient {
            ingredient_id: rice.id,
            amount: 200,
        }],
        tags: Vec::new(),
    };
    let err = db.create_recipe(&again).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // Another author may reuse the name
    let theirs = NewRecipe {
        author_id: other.id,
        ..again
    };
    db.create_recipe(&theirs).await.unwrap();
}

#[tokio::test]
async fn test_repeated_ingredient_line_is_rejected() {
    let db = create_test_database().await.unwrap();
    let author = create_test_user(&db, "chef").await;
    let rice = ingredient(&db, "Rice", "g").await;

    let line = NewRecipeIngredient {
        ingredient_id: rice.id,
        amount: 100,
    };
    let err = db
        .create_recipe(&NewRecipe {
            author_id: author.id,
            name: "Double rice".into(),
            text: "Rice twice".into(),
            cooking_time: 20,
            ingredients: vec![line, line],
            tags: Vec::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_unknown_ingredient_rolls_back_recipe() {
    let db = create_test_database().await.unwrap();
    let author = create_test_user(&db, "chef").await;

    let err = db
        .create_recipe(&NewRecipe {
            author_id: author.id,
            name: "Phantom stew".into(),
            text: "Nothing in it".into(),
            cooking_time: 20,
            ingredients: vec![NewRecipeIngredient {
                ingredient_id: 999,
                amount: 1,
            }],
            tags: Vec::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(!db.recipe_exists(1).await.unwrap());
}

#[tokio::test]
async fn test_zero_amount_is_out_of_range() {
    let db = create_test_database().await.unwrap();
    let author = create_test_user(&db, "chef").await;
    let salt = ingredient(&db, "Salt", "g").await;

    let err = db
        .create_recipe(&NewRecipe {
            author_id: author.id,
            name: "Air".into(),
            text: "Nothing".into(),
            cooking_time: 1,
            ingredients: vec![NewRecipeIngredient {
                ingredient_id: salt.id,
                amount: 0,
            }],
            tags: Vec::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}
