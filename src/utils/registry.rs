//! Stores the process-wide registry of work sites.
//!
//! Sites are deployment data, not algorithmic constants: they are
//! loaded once from configuration at startup and read-only afterwards.
//! End users never create or mutate them.

use once_cell::sync::OnceCell;

use crate::site::Site;

/// Registered work sites that sampled device positions are checked
/// against.
pub static SITES: OnceCell<Vec<Site>> = OnceCell::new();

/// Checks if the site registry is initialized.
pub fn is_registry_initialized() -> bool {
    SITES.get().is_some()
}

/// Initializes the registry with already-constructed sites.
///
/// Every site must carry in-range coordinates and a positive radius;
/// a configuration that fails validation leaves the registry untouched.
pub fn init_sites(sites: Vec<Site>) -> Result<(), String> {
    info!("Initializing site registry");
    if sites.is_empty() {
        error!("Site configuration is empty");
        return Err("Site configuration must register at least one site".to_string());
    }
    for site in &sites {
        debug!("site: {:?}", site);
        if !site.location.is_valid() {
            error!("Out-of-range coordinates for site {}", site.name);
            return Err("Out-of-range coordinates for site: ".to_owned() + &site.name);
        }
        if site.radius_meters <= 0.0 {
            error!("Non-positive radius for site {}", site.name);
            return Err("Radius must be positive for site: ".to_owned() + &site.name);
        }
    }
    SITES.set(sites).map_err(|_| {
        "Site registry already initialized. Try to use it instead of initializing it.".to_string()
    })
}

/// Initializes the registry from its JSON configuration form, a flat
/// array of site records.
///
/// See [`Site`] for the record shape.
pub fn init_sites_from_json(raw: &str) -> Result<(), String> {
    info!("Initializing site registry from JSON configuration");
    let sites: Vec<Site> = serde_json::from_str(raw)
        .map_err(|e| "Malformed site configuration: ".to_owned() + &e.to_string())?;
    init_sites(sites)
}

/// Gets all registered sites.
pub fn get_sites() -> Result<&'static Vec<Site>, String> {
    SITES
        .get()
        .ok_or_else(|| "Site registry not initialized. Try to initialize it first.".to_string())
}

/// Gets a site by name.
pub fn get_site_by_name(name: &str) -> Result<&'static Site, String> {
    debug!("name: {}", name);
    let sites = get_sites()?;
    let site = sites
        .iter()
        .find(|site| site.name == name)
        .ok_or_else(|| "Site not found by name: ".to_owned() + name)?;
    Ok(site)
}

#[cfg(test)]
mod registry_tests {
    use ordered_float::OrderedFloat;

    use super::*;
    use crate::location::Location;

    const SITE_CONFIG: &str = r#"[
        {
            "name": "Main Office",
            "address": "123 Business Street, Tech City",
            "latitude": 40.7128,
            "longitude": -74.0060,
            "radius_meters": 500.0
        },
        {
            "name": "Branch Office",
            "address": "456 Innovation Ave, Tech City",
            "latitude": 40.7589,
            "longitude": -73.9851,
            "radius_meters": 300.0
        }
    ]"#;

    fn site(name: &str, latitude: f64, radius_meters: f64) -> Site {
        Site {
            name: name.to_string(),
            address: "1 Example Street".to_string(),
            location: Location {
                latitude: OrderedFloat(latitude),
                longitude: OrderedFloat(0.0),
            },
            radius_meters,
        }
    }

    /// The registry is one process-wide cell, so its whole lifecycle is
    /// covered sequentially in a single test.
    #[test]
    fn test_registry_lifecycle() {
        assert!(!is_registry_initialized());
        assert!(get_sites().is_err());

        // rejected configurations must not seed the registry
        assert!(init_sites_from_json("not json").is_err());
        assert!(init_sites(vec![]).is_err());
        assert!(init_sites(vec![site("Nowhere", 91.0, 100.0)]).is_err());
        assert!(init_sites(vec![site("Flat", 40.0, 0.0)]).is_err());
        assert!(!is_registry_initialized());

        init_sites_from_json(SITE_CONFIG).unwrap();
        assert!(is_registry_initialized());
        assert_eq!(get_sites().unwrap().len(), 2);

        let main_office = get_site_by_name("Main Office").unwrap();
        assert_eq!(main_office.address, "123 Business Street, Tech City");
        assert_eq!(main_office.radius_meters, 500.0);
        assert!(get_site_by_name("Warehouse").is_err());

        // a second initialization fails and keeps the first registry
        assert!(init_sites_from_json(SITE_CONFIG).is_err());
        assert_eq!(get_sites().unwrap().len(), 2);
    }
}
