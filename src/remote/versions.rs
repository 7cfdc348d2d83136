use super::*;

pub const PENDING_VERSION_STATE: &str = "PREPARE_FOR_SUBMISSION";

impl AscClient {
    /// Finds the app's version in `PREPARE_FOR_SUBMISSION`.
    ///
    /// When the filtered query fails or comes back empty, every version is listed with its
    /// state so the operator can see why, and `None` is returned.
    pub fn find_pending_version(&self, app_id: &str) -> Result<Option<AppVersion>> {
        let path = versions_path(app_id);
        let resp = self.api_request::<()>(
            Method::GET,
            &path,
            None,
            &[("filter[appStoreState]", PENDING_VERSION_STATE)],
        )?;

        if !resp.status().is_success() {
            println!("Error getting versions: {}", resp.status().as_u16());
            println!("{}", error_body(resp));
            self.print_all_versions(app_id);
            return Ok(None);
        }

        let doc: Document<Vec<Resource<VersionAttributes>>> =
            resp.json().context("parse app store versions")?;
        if doc.data.len() > 1 {
            tracing::warn!(
                count = doc.data.len(),
                "several pending versions; using the first"
            );
        }
        match doc.data.into_iter().next() {
            Some(v) => {
                let version = AppVersion::from(v);
                println!("Found version: {}", version.describe());
                Ok(Some(version))
            }
            None => {
                println!("No version in {} state", PENDING_VERSION_STATE);
                self.print_all_versions(app_id);
                Ok(None)
            }
        }
    }

    /// Lists every version of the app, regardless of state.
    pub fn list_versions(&self, app_id: &str) -> Result<Vec<AppVersion>> {
        let resp = self.get(&versions_path(app_id))?;
        if !resp.status().is_success() {
            anyhow::bail!("list versions status {}", resp.status().as_u16());
        }
        let doc: Document<Vec<Resource<VersionAttributes>>> =
            resp.json().context("parse app store versions")?;
        Ok(doc.data.into_iter().map(AppVersion::from).collect())
    }

    fn print_all_versions(&self, app_id: &str) {
        println!();
        println!("All versions:");
        match self.list_versions(app_id) {
            Ok(versions) => {
                for v in versions {
                    println!("  {}", v.describe());
                }
            }
            Err(err) => println!("  (could not list versions: {:#})", err),
        }
    }
}

fn versions_path(app_id: &str) -> String {
    format!("/v1/apps/{}/appStoreVersions", app_id)
}
