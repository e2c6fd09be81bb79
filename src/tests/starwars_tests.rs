use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{
    DEFAULT_DEPRECATION_REASON, NamedType, NamedTypeConfig, ObjectType, Schema, Type, TypeKind,
    tests::fixtures::starwars::{StarWars, required},
};

#[test]
fn collects_reachable_types() {
    let star_wars = StarWars::declare();
    let schema = star_wars.schema();

    assert_eq!(
        schema.type_map().keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        ["Query", "Boolean", "String", "Character", "Episode", "Human", "Droid"],
    );
    for (name, ty) in schema.type_map() {
        assert_eq!(name, ty.name());
    }
    assert!(schema.validate().is_empty());
}

#[test]
fn resolves_circular_references() {
    let star_wars = StarWars::declare();

    let friends = star_wars
        .character
        .field_by_name("friends")
        .unwrap()
        .unwrap();
    assert_eq!(friends.field_type.to_string(), "[Character]");
    assert_eq!(
        friends.field_type.named_type(),
        &NamedType::from(star_wars.character.clone()),
    );

    let human_friends = star_wars.human.field_by_name("friends").unwrap().unwrap();
    assert_eq!(human_friends.field_type, friends.field_type);
    assert_eq!(star_wars.human.interfaces().unwrap(), [star_wars.character.clone()]);
}

#[test]
fn frees_circular_types_along_with_their_schema() {
    let star_wars = StarWars::declare();
    let schema = star_wars.schema();
    let character = Arc::downgrade(&star_wars.character.0);
    let human = Arc::downgrade(&star_wars.human.0);

    drop(schema);
    assert!(character.upgrade().is_some(), "still held by its handle");

    drop(star_wars);
    assert!(character.upgrade().is_none());
    assert!(human.upgrade().is_none());
}

#[test]
fn answers_possible_types() {
    let star_wars = StarWars::declare();
    let schema = star_wars.schema();
    let character = NamedType::from(star_wars.character.clone());

    assert_eq!(
        schema.possible_types(&character),
        [star_wars.human.clone(), star_wars.droid.clone()],
    );
    assert!(schema.is_possible_type(&character, &star_wars.droid));
    assert!(!schema.is_possible_type(
        &NamedType::from(star_wars.episode.clone()),
        &star_wars.droid,
    ));

    let human = Type::from(star_wars.human.clone());
    let character = Type::from(star_wars.character.clone());
    assert!(schema.is_subtype(&human, &character));
    assert!(schema.is_subtype(&required(star_wars.human.clone()), &character));
    assert!(schema.is_subtype(&human.clone().list(), &character.clone().list()));
    assert!(!schema.is_subtype(&character, &human));
    assert!(!schema.is_subtype(&human.list(), &character.non_null().unwrap()));
}

#[test]
fn exposes_declared_metadata() {
    let star_wars = StarWars::declare();
    let schema = star_wars.schema();

    let episode = schema.type_by_name("Episode").unwrap();
    assert_eq!(episode.kind(), TypeKind::Enum);
    assert_eq!(
        episode.description().map(|d| d.as_str()),
        Some("One of the films in the Star Wars Trilogy"),
    );
    assert_eq!(star_wars.episode.parse_value("EMPIRE"), Ok(Some(&json!(5))));
    assert_eq!(
        star_wars.episode.serialize(&json!(6)).unwrap().unwrap().name,
        "JEDI",
    );

    let backstory = star_wars
        .droid
        .field_by_name("secretBackstory")
        .unwrap()
        .unwrap();
    assert!(backstory.is_deprecated());
    assert_eq!(backstory.deprecation_reason().unwrap(), "Secrets are secret.");

    let hero = star_wars.query.field_by_name("hero").unwrap().unwrap();
    let episode_arg = hero.argument_by_name("episode").unwrap();
    assert_eq!(episode_arg.arg_type.to_string(), "Episode");
    assert_eq!(episode_arg.default_value, None);

    let resolve_type = star_wars.character.resolve_type().unwrap();
    assert_eq!(
        resolve_type(&json!({ "type": "Droid" })).as_deref(),
        Some("Droid"),
    );

    let deprecated = schema.directive_by_name("deprecated").unwrap();
    assert_eq!(
        deprecated.argument_by_name("reason").unwrap().default_value,
        Some(json!(DEFAULT_DEPRECATION_REASON)),
    );
}

#[test]
fn projects_equal_snapshots_for_equal_declarations() {
    let star_wars = StarWars::declare();
    let schema = star_wars.schema();

    let snapshots = schema
        .type_map()
        .values()
        .map(|t| t.to_config().unwrap())
        .collect::<Vec<_>>();
    let NamedTypeConfig::Object(human) = &snapshots[5] else {
        panic!("`Human` is an object");
    };
    assert!(!human.fields.is_deferred());
    assert!(!human.interfaces.is_deferred());
    assert_eq!(
        human.fields.force().keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        ["id", "name", "friends", "appearsIn", "secretBackstory", "homePlanet"],
    );

    // Reassembling the snapshot yields the same schema.
    let reassembled = Schema::new(schema.to_config()).unwrap();
    assert_eq!(
        reassembled.type_map().keys().collect::<Vec<_>>(),
        schema.type_map().keys().collect::<Vec<_>>(),
    );
    assert_eq!(reassembled.to_config(), schema.to_config());

    // A type redeclared out of its own snapshot projects onto the same one.
    let redeclared = ObjectType::new(human.clone());
    assert_eq!(&redeclared.to_config().unwrap(), human);
}
