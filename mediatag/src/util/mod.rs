pub(crate) mod alloc;
pub(crate) mod bytes;
pub(crate) mod io;
pub(crate) mod text;
