use tracing::debug;

use crate::catalog::Project;

#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub project_id: String,
    pub project_title: String,
    pub track_id: Option<String>,
    pub license_id: String,
    pub license_name: String,
    pub price: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a license of `project` to the cart. Without a license id the
    /// project's first offer is used, as the purchase dialog preselects it.
    pub fn add(
        &mut self,
        project: &Project,
        track_id: Option<&str>,
        license_id: Option<&str>,
    ) -> Result<&CartItem, String> {
        let license = match license_id {
            Some(id) => project
                .license(id)
                .ok_or_else(|| format!("No license {} on {}", id, project.title))?,
            None => project
                .licenses
                .first()
                .ok_or_else(|| format!("{} has no licenses for sale", project.title))?,
        };
        if let Some(track_id) = track_id {
            if project.track(track_id).is_none() {
                return Err(format!("No track {} on {}", track_id, project.title));
            }
        }

        debug!("Adding {} ({}) to cart", project.id, license.id);
        self.items.push(CartItem {
            project_id: project.id.clone(),
            project_title: project.title.clone(),
            track_id: track_id.map(String::from),
            license_id: license.id.clone(),
            license_name: license.name.clone(),
            price: license.price,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_projects;

    #[test]
    fn test_add_defaults_to_first_license() {
        let projects = fallback_projects();
        let mut cart = Cart::new();

        let item = cart.add(&projects[0], None, None).unwrap();
        assert_eq!(item.license_id, projects[0].licenses[0].id);
        assert_eq!(item.price, projects[0].licenses[0].price);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_sums_prices() {
        let projects = fallback_projects();
        let mut cart = Cart::new();
        let wav = format!("{}-wav", projects[0].id);

        cart.add(&projects[0], Some("p1-t1"), Some(wav.as_str())).unwrap();
        cart.add(&projects[1], None, None).unwrap();

        let expected = projects[0].license(&wav).unwrap().price + projects[1].licenses[0].price;
        assert!((cart.total() - expected).abs() < 1e-9);
        assert_eq!(cart.items()[0].track_id.as_deref(), Some("p1-t1"));
    }

    #[test]
    fn test_add_rejects_unknown_ids() {
        let projects = fallback_projects();
        let mut cart = Cart::new();

        assert!(cart.add(&projects[0], None, Some("nope")).is_err());
        assert!(cart.add(&projects[0], Some("nope"), None).is_err());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_clear() {
        let projects = fallback_projects();
        let mut cart = Cart::new();
        cart.add(&projects[2], None, None).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
