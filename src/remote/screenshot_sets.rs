use super::*;

impl AscClient {
    pub fn list_screenshot_sets(&self, localization_id: &str) -> Result<Vec<ScreenshotSet>> {
        let resp = self.get(&format!(
            "/v1/appStoreVersionLocalizations/{}/appScreenshotSets",
            localization_id
        ))?;
        if !resp.status().is_success() {
            println!("Error getting screenshot sets: {}", resp.status().as_u16());
            println!("{}", error_body(resp));
            return Ok(Vec::new());
        }

        let doc: Document<Vec<Resource<ScreenshotSetAttributes>>> =
            resp.json().context("parse screenshot sets")?;
        let sets: Vec<ScreenshotSet> = doc.data.into_iter().map(ScreenshotSet::from).collect();
        for s in &sets {
            println!("  Screenshot set: {} (type: {})", s.id, s.display_type);
        }
        Ok(sets)
    }

    /// Returns `None` when the server refuses to create the set.
    pub fn create_screenshot_set(
        &self,
        localization_id: &str,
        display_type: &str,
    ) -> Result<Option<ScreenshotSet>> {
        let body = WriteDocument {
            data: WriteResource {
                kind: SCREENSHOT_SETS,
                id: None,
                attributes: NewScreenshotSetAttributes {
                    screenshot_display_type: display_type.to_string(),
                },
                relationships: Some(NewScreenshotSetRelationships {
                    app_store_version_localization: Relationship::to(
                        LOCALIZATIONS,
                        localization_id,
                    ),
                }),
            },
        };
        let resp = self.api_request(Method::POST, "/v1/appScreenshotSets", Some(&body), &[])?;

        if !resp.status().is_success() {
            println!("  Error creating screenshot set: {}", resp.status().as_u16());
            println!("{}", error_body(resp));
            return Ok(None);
        }

        let doc: Document<Resource<ScreenshotSetAttributes>> =
            resp.json().context("parse created screenshot set")?;
        let set = ScreenshotSet::from(doc.data);
        println!("  Created screenshot set: {}", set.id);
        Ok(Some(set))
    }

    /// Reuses the localization's set for `device`, creating it only when none exists.
    pub fn resolve_screenshot_set(
        &self,
        localization_id: &str,
        device: Device,
    ) -> Result<Option<ScreenshotSet>> {
        let existing = self.list_screenshot_sets(localization_id)?;
        if let Some(set) = find_screenshot_set(&existing, device.display_type()) {
            println!("   Found existing set for {}: {}", device, set.id);
            return Ok(Some(set.clone()));
        }

        println!();
        println!(
            "Creating screenshot set for {} ({})...",
            device,
            device.display_type()
        );
        self.create_screenshot_set(localization_id, device.display_type())
    }
}

pub fn find_screenshot_set<'a>(
    sets: &'a [ScreenshotSet],
    display_type: &str,
) -> Option<&'a ScreenshotSet> {
    sets.iter().find(|s| s.display_type == display_type)
}

#[cfg(test)]
#[path = "../tests/remote/screenshot_sets_tests.rs"]
mod tests;
