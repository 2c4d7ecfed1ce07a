#[cfg(feature = "tracing")]
macro_rules! dtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "dragsort", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ddebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "dragsort", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ddebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! dwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "dragsort", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dwarn {
    ($($tt:tt)*) => {};
}
