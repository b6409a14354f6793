//! Vite asset resolution for Ferrolith
//!
//! Resolves a Vite build manifest into script/style markup and preload
//! descriptors. Two mutually exclusive modes, selected solely by the
//! presence of a dev server URL:
//!
//! - **dev mode** - markup points at the live Vite dev server; styles are
//!   injected by the dev client, so style markup is always empty
//! - **production mode** - entry points resolve through the on-disk
//!   manifest (`.vite/manifest.json`, falling back to `manifest.json`)
//!
//! Resolution is best-effort by design: a missing or malformed manifest and
//! entry points absent from it all degrade to empty output, never to an
//! error. The parsed manifest is memoized per resolver instance.

pub mod config;
pub mod manifest;
pub mod resolver;

pub use config::ViteConfig;
pub use manifest::{ManifestEntry, ViteManifest, load_manifest};
pub use resolver::{AssetKind, PreloadLink, ViteAssetResolver};
