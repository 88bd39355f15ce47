//! Logging shims shared by browser and server builds.
//!
//! Hydrated builds log through the `log` facade (wired to the browser console
//! in `hydrate()`); SSR builds go through `tracing`. Plain test builds drop
//! the message.

pub fn info(message: &str) {
    #[cfg(feature = "hydrate")]
    log::info!("{message}");
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    tracing::info!("{message}");
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    let _ = message;
}

pub fn warn(message: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("{message}");
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    tracing::warn!("{message}");
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    let _ = message;
}

pub fn error(message: &str) {
    #[cfg(feature = "hydrate")]
    log::error!("{message}");
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    tracing::error!("{message}");
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    let _ = message;
}
