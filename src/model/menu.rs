/// A single dish on the recovery menu.
///
/// Catalog records are immutable: the set is fixed at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// URL of the dish photo shown on the menu card.
    pub image: String,
    /// Accent color for the menu card, as a hex string.
    pub color: String,
    pub tags: Vec<String>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        color: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            color: color.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The fixed in-memory menu catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

fn proxy_image(url: &str) -> String {
    // Route photos through the wsrv.nl resizing proxy for stable loading.
    format!(
        "https://wsrv.nl/?url={}&w=800&h=800&fit=cover&output=webp&q=85",
        urlencoding::encode(url)
    )
}

impl Catalog {
    /// The standard Green FC recovery menu: four warm Korean stews.
    pub fn standard() -> Self {
        Self {
            items: vec![
                MenuItem::new(
                    "sundubu",
                    "Sundubu Jjigae",
                    proxy_image("https://images.unsplash.com/photo-1627308595229-7830a5c91f9f?auto=format&fit=crop&q=80&w=800"),
                    "#ef4444",
                    &["spicy", "soft tofu", "protein"],
                ),
                MenuItem::new(
                    "kimchi",
                    "Kimchi Jjigae",
                    proxy_image("https://images.unsplash.com/photo-1541696432-82c6da8ce7bf?auto=format&fit=crop&q=80&w=800"),
                    "#f97316",
                    &["hearty", "classic", "filling"],
                ),
                MenuItem::new(
                    "dongtae",
                    "Dongtae Tang",
                    proxy_image("https://images.unsplash.com/photo-1559737558-2f5a35f4523b?auto=format&fit=crop&q=80&w=800"),
                    "#3b82f6",
                    &["refreshing", "seafood", "recovery"],
                ),
                MenuItem::new(
                    "seonji",
                    "Seonji Haejangguk",
                    proxy_image("https://images.unsplash.com/photo-1547592166-23ac45744acd?auto=format&fit=crop&q=80&w=800"),
                    "#7f1d1d",
                    &["iron-rich", "energy", "traditional"],
                ),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Case-sensitive exact match on the display name.
    pub fn by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// The first catalog entry, used as the fallback when an external
    /// recommendation names a dish we don't serve.
    pub fn first(&self) -> &MenuItem {
        &self.items[0]
    }

    /// Draws one item uniformly at random.
    pub fn random(&self) -> &MenuItem {
        use rand::Rng;
        let index = rand::thread_rng().gen_range(0..self.items.len());
        &self.items[index]
    }

    /// Display names joined for prompt construction, e.g.
    /// `"Sundubu Jjigae, Kimchi Jjigae, ..."`.
    pub fn names_joined(&self) -> String {
        self.items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_four_items() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.items().len(), 4);
        assert_eq!(catalog.first().id, "sundubu");
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        let catalog = Catalog::standard();
        assert!(catalog.by_name("Kimchi Jjigae").is_some());
        assert!(catalog.by_name("kimchi jjigae").is_none());
        assert!(catalog.by_name("Bibimbap").is_none());
    }

    #[test]
    fn random_draws_from_the_catalog() {
        let catalog = Catalog::standard();
        for _ in 0..32 {
            let item = catalog.random();
            assert!(catalog.by_id(&item.id).is_some());
        }
    }

    #[test]
    fn image_urls_are_proxied() {
        let catalog = Catalog::standard();
        for item in catalog.items() {
            assert!(item.image.starts_with("https://wsrv.nl/?url=https%3A%2F%2F"));
            // The source query string must survive as a single encoded value:
            // only the proxy's own '?' may appear un-encoded.
            assert!(item.image.contains("%3Fauto%3Dformat"));
            assert_eq!(item.image.matches('?').count(), 1);
        }
    }
}
