//! Users command - staff account provisioning.

use std::sync::Arc;

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::domain::NewUser;
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::{AuthService, Authenticator};

pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let auth = Authenticator::new(Arc::new(UserStore::new(db.get_connection())), config);

    match args.action {
        UsersAction::Create {
            name,
            email,
            password,
            admin,
        } => {
            let user = auth
                .create_user(NewUser {
                    name,
                    email,
                    password,
                    admin,
                })
                .await?;

            let role = if user.is_admin() { "administrator" } else { "staff" };
            println!("Created {} #{} <{}>", role, user.id, user.email);
        }
    }

    Ok(())
}
