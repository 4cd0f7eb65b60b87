use reel_core::{
    catalog::{Catalog, CatalogConfig},
    error::Error,
    section::Section,
    tmdb::TmdbClient,
};
use std::{env, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(arg) = args.get(1) else {
        print_sections();
        return;
    };
    let section = match arg.parse::<Section>() {
        Ok(section) => section,
        Err(err) => {
            eprintln!("{err}");
            print_sections();
            process::exit(2);
        }
    };
    let config = CatalogConfig {
        api_key: env::var("REEL_API_KEY").unwrap_or_default(),
        proxy_url: env::var("HTTPS_PROXY").ok(),
        ..CatalogConfig::default()
    };

    if let Err(err) = list(section, &TmdbClient::new(config)) {
        log::error!("failed to load {section}: {err}");
        process::exit(1);
    }
}

fn print_sections() {
    println!("Usage: reel-cli <section>");
    for section in Section::ALL {
        println!("  {:<16}{}", section.slug(), section.label());
    }
}

fn list(section: Section, catalog: &dyn Catalog) -> Result<(), Error> {
    let titles = section.fetch(catalog)?;
    println!("{} ({})", section.label(), titles.len());
    for (index, title) in titles.iter().enumerate() {
        println!(
            "{:>3}. {} ({})",
            index,
            title.display_name(),
            title.poster_path().unwrap_or("no poster")
        );
    }
    Ok(())
}
