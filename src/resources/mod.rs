use anyhow::Context;

use crate::resources::mesh::ObjMesh;

/**
 * This module contains all logic for fetching and parsing mesh files from
 * external storage. Fetching is the only suspension point in the crate:
 * natively it reads from the `assets/` directory, on wasm32 it fetches from
 * the site origin. Parsing and committing to the scene happen afterwards on
 * the caller's thread.
 */
pub mod mesh;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> reqwest::Url {
    let window = web_sys::window().unwrap();
    let location = window.location();
    let origin = location.origin().unwrap();
    let base = reqwest::Url::parse(&format!("{}/assets/", origin)).unwrap();
    base.join(file_name).unwrap()
}

pub async fn load_string(file_name: &str) -> anyhow::Result<String> {
    #[cfg(target_arch = "wasm32")]
    let txt = {
        let url = format_url(file_name);
        reqwest::get(url).await?.text().await?
    };
    #[cfg(not(target_arch = "wasm32"))]
    let txt = {
        // TODO: pass env for absolute path from lib caller
        let path = std::path::Path::new("./").join("assets").join(file_name);
        std::fs::read_to_string(path)?
    };

    Ok(txt)
}

/// Fetch an OBJ file and parse it into flat attribute streams.
///
/// Fails on fetch errors and on the empty-geometry condition; either way
/// nothing has been committed anywhere, so a failed load has no side
/// effects beyond the log.
pub async fn load_mesh_obj(file_name: &str) -> anyhow::Result<ObjMesh> {
    let text = load_string(file_name)
        .await
        .with_context(|| format!("fetching mesh file `{file_name}`"))?;
    let mesh = mesh::parse_obj(&text).with_context(|| format!("parsing mesh file `{file_name}`"))?;
    Ok(mesh)
}
