pub(crate) mod graphql;
pub(crate) mod health;
