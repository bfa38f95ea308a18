macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "tracing")]
        tracing::info!($($arg)+);
    );
}

macro_rules! warning {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)+);
    );
}

macro_rules! debug {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    );
}

pub(crate) use debug;
pub(crate) use info;
pub(crate) use warning;
