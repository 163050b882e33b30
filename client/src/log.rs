/// Logs through `tracing` with a `[module][scope]` prefix, e.g.
/// `brainz_log!(debug, "Client", "artist", "GET {}", url)`.
#[macro_export]
macro_rules! brainz_log {
    ($level:ident, $module:expr, $scope:expr, $msg:expr $(, $args:expr)* $(,)?) => {
        ::tracing::$level!(
            "[{}][{}] {}", $module, $scope, format!($msg $(, $args)*)
        );
    };
}
