use crate::models::config::CONFIG_PATH;
use crate::models::BalvatikaConfig;
use crate::store::{seed, JsonFileStore, RecordStore};
use crate::Result;
use chrono::Utc;
use colored::Colorize;
use std::path::Path;

/// Write balvatika/config.toml and optionally the demo requests
pub fn run(project_root: &Path, data_dir: Option<&Path>, demo: bool, force: bool) -> Result<()> {
    let config_path = project_root.join(CONFIG_PATH);
    if config_path.exists() && !force {
        println!("{}", "⚠️  Balvatika is already initialized".yellow());
        println!("   Run with --force to rewrite {}", CONFIG_PATH);
        return Ok(());
    }

    let config = BalvatikaConfig {
        data_dir: data_dir.map(Path::to_path_buf),
        seed_demo_data: demo,
        ..BalvatikaConfig::default()
    };
    config.save(project_root)?;
    println!("   ✓ {}", CONFIG_PATH);

    let mut store = JsonFileStore::open(config.resolve_data_dir(data_dir), &config.slot)?;
    if demo {
        if seed::seed_if_empty(&mut store, Utc::now())? {
            println!("   ✓ demo requests written to {}", store.path().display());
        } else {
            println!("   • {} already holds requests, left as is", store.path().display());
        }
    } else {
        println!("   • requests will be stored in {}", store.path().display());
    }

    println!(
        "{}",
        format!(
            "Ready. {} request(s) on file. Sign in with 'balvatika app'.",
            store.load()?.len()
        )
        .green()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config_and_demo() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");

        run(temp.path(), Some(&data), true, false).unwrap();

        let config = BalvatikaConfig::load(temp.path()).unwrap();
        assert!(config.seed_demo_data);
        assert_eq!(config.data_dir.as_deref(), Some(data.as_path()));

        let store = JsonFileStore::open(&data, &config.slot).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_init_does_not_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");

        run(temp.path(), Some(&data), false, false).unwrap();
        run(temp.path(), Some(&data), true, false).unwrap();
        assert!(!BalvatikaConfig::load(temp.path()).unwrap().seed_demo_data);

        run(temp.path(), Some(&data), true, true).unwrap();
        assert!(BalvatikaConfig::load(temp.path()).unwrap().seed_demo_data);
    }
}
