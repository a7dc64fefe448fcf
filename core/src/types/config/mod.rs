mod app;

pub use app::{
    AppConfig, AppConfigError, BuiltInTagsConfig, FavoritesConfig, SearchPreferences,
    UserTagPair,
};
