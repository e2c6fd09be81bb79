use std::sync::{Arc, OnceLock};

use arcstr::{ArcStr, literal};
use indexmap::indexmap;

use crate::{
    ArgumentConfig, EnumConfig, EnumType, EnumValueConfig, FieldConfig, FieldConfigMap,
    InterfaceConfig, InterfaceType, NamedType, NonNullType, ObjectConfig, ObjectType, ScalarType,
    Schema, SchemaConfig, Thunk, Type, Value,
};

/// Handle to a type declared after the thunks referring to it.
pub struct Later<T>(Arc<OnceLock<T>>);

impl<T> Clone for Later<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone> Later<T> {
    pub fn new() -> Self {
        Self(Arc::new(OnceLock::new()))
    }

    pub fn define(&self, value: T) -> T {
        assert!(self.0.set(value.clone()).is_ok(), "defined twice");
        value
    }

    pub fn get(&self) -> T {
        self.0.get().expect("forced before being defined").clone()
    }
}

pub fn required(ty: impl Into<NamedType>) -> Type {
    Type::NonNull(NonNullType::from(ty.into()))
}

/// Types of the Star Wars schema.
pub struct StarWars {
    pub episode: EnumType,
    pub character: InterfaceType,
    pub human: ObjectType,
    pub droid: ObjectType,
    pub query: ObjectType,
}

impl StarWars {
    /// Declares the Star Wars types, with circular references deferred.
    pub fn declare() -> Self {
        let episode = EnumType::new(
            EnumConfig::new(
                "Episode",
                indexmap! {
                    literal!("NEW_HOPE") => EnumValueConfig::new()
                        .value(4)
                        .description("Released in 1977."),
                    literal!("EMPIRE") => EnumValueConfig::new()
                        .value(5)
                        .description("Released in 1980."),
                    literal!("JEDI") => EnumValueConfig::new()
                        .value(6)
                        .description("Released in 1983."),
                },
            )
            .description("One of the films in the Star Wars Trilogy"),
        );

        let character_later = Later::new();
        let character = character_later.define(InterfaceType::new(
            InterfaceConfig::new(
                "Character",
                Thunk::deferred({
                    let character = character_later.clone();
                    let episode = episode.clone();
                    move || character_fields(Type::from(character.get()), &episode)
                }),
            )
            .description("A character in the Star Wars Trilogy")
            .resolve_type(|v| v.get("type").and_then(Value::as_str).map(ArcStr::from)),
        ));

        let human = ObjectType::new(
            ObjectConfig::new(
                "Human",
                Thunk::deferred({
                    let character = character.clone();
                    let episode = episode.clone();
                    move || {
                        let mut fields = character_fields(character.clone().into(), &episode);
                        fields.insert(
                            literal!("homePlanet"),
                            FieldConfig::new(ScalarType::string())
                                .description("The home planet of the human, or null if unknown."),
                        );
                        fields
                    }
                }),
            )
            .description("A humanoid creature in the Star Wars universe.")
            .interfaces(Thunk::deferred({
                let character = character.clone();
                move || vec![character.clone()]
            })),
        );

        let droid = ObjectType::new(
            ObjectConfig::new(
                "Droid",
                Thunk::deferred({
                    let character = character.clone();
                    let episode = episode.clone();
                    move || {
                        let mut fields = character_fields(character.clone().into(), &episode);
                        fields.insert(
                            literal!("primaryFunction"),
                            FieldConfig::new(ScalarType::string())
                                .description("The primary function of the droid."),
                        );
                        fields
                    }
                }),
            )
            .description("A mechanical creature in the Star Wars universe.")
            .interfaces(vec![character.clone()]),
        );

        let query = ObjectType::new(ObjectConfig::new(
            "Query",
            indexmap! {
                literal!("hero") => FieldConfig::new(character.clone()).argument(
                    "episode",
                    ArgumentConfig::new(episode.clone()).description(
                        "If omitted, returns the hero of the whole saga. \
                         If provided, returns the hero of that particular episode.",
                    ),
                ),
                literal!("human") => FieldConfig::new(human.clone()).argument(
                    "id",
                    ArgumentConfig::new(required(ScalarType::string()))
                        .description("id of the human"),
                ),
                literal!("droid") => FieldConfig::new(droid.clone()).argument(
                    "id",
                    ArgumentConfig::new(required(ScalarType::string()))
                        .description("id of the droid"),
                ),
            },
        ));

        Self {
            episode,
            character,
            human,
            droid,
            query,
        }
    }

    /// Assembles the schema out of the declared types.
    pub fn schema(&self) -> Schema {
        Schema::new(SchemaConfig::new(self.query.clone())).expect("valid Star Wars schema")
    }
}

fn character_fields(character: Type, episode: &EnumType) -> FieldConfigMap {
    indexmap! {
        literal!("id") => FieldConfig::new(required(ScalarType::string()))
            .description("The id of the character."),
        literal!("name") => FieldConfig::new(ScalarType::string())
            .description("The name of the character."),
        literal!("friends") => FieldConfig::new(character.list())
            .description("The friends of the character, or an empty list if they have none."),
        literal!("appearsIn") => FieldConfig::new(Type::from(episode.clone()).list())
            .description("Which movies they appear in."),
        literal!("secretBackstory") => FieldConfig::new(ScalarType::string())
            .description("All secrets about their past.")
            .deprecated("Secrets are secret."),
    }
}
