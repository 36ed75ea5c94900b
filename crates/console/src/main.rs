use std::io;

use anyhow::Context;

use libris_auth::CredentialStore;
use libris_console::{Config, Session};
use libris_inventory::InventoryStore;

fn main() -> anyhow::Result<()> {
    libris_observability::init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(
        grace_days = config.policy.grace_days,
        daily_rate = config.policy.daily_rate,
        "starting libris console"
    );

    let mut store = InventoryStore::new().with_policy(config.policy);
    let mut credentials =
        CredentialStore::with_admin(config.admin_username.clone(), config.admin_password.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), &mut store, &mut credentials)
        .with_output_format(config.output)
        .run()
        .context("console session failed")?;

    tracing::info!(items = store.len(), "libris console stopped");
    Ok(())
}
