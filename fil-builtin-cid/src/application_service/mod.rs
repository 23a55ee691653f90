pub mod actor_registry;

pub use actor_registry::ActorRegistry;
