mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod file;
pub use file::FileCredentialProvider;

mod static_provider;
pub use static_provider::StaticCredentialProvider;
