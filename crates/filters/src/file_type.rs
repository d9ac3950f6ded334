use std::fs;

use crate::error::UnknownTypeCode;

/// File types selectable with `-type`.
///
/// Each variant corresponds to one of the character codes accepted on the
/// command line: `b`, `c`, `d`, `f`, `l`, `p`, `s`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileType {
    /// Block special device (`b`).
    BlockDevice,
    /// Character special device (`c`).
    CharDevice,
    /// Directory (`d`).
    Directory,
    /// Regular file (`f`).
    Regular,
    /// Symbolic link (`l`).
    Symlink,
    /// Named pipe (`p`).
    Fifo,
    /// Socket (`s`).
    Socket,
}

impl FileType {
    /// Maps a `-type` character code onto a [`FileType`].
    pub fn from_code(code: char) -> Result<Self, UnknownTypeCode> {
        match code {
            'b' => Ok(Self::BlockDevice),
            'c' => Ok(Self::CharDevice),
            'd' => Ok(Self::Directory),
            'f' => Ok(Self::Regular),
            'l' => Ok(Self::Symlink),
            'p' => Ok(Self::Fifo),
            's' => Ok(Self::Socket),
            code => Err(UnknownTypeCode { code }),
        }
    }

    /// Returns the character code for the type.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::BlockDevice => 'b',
            Self::CharDevice => 'c',
            Self::Directory => 'd',
            Self::Regular => 'f',
            Self::Symlink => 'l',
            Self::Fifo => 'p',
            Self::Socket => 's',
        }
    }

    /// Returns whether `file_type` is exactly this type.
    #[cfg(unix)]
    #[must_use]
    pub fn matches(self, file_type: fs::FileType) -> bool {
        use std::os::unix::fs::FileTypeExt;

        match self {
            Self::BlockDevice => file_type.is_block_device(),
            Self::CharDevice => file_type.is_char_device(),
            Self::Directory => file_type.is_dir(),
            Self::Regular => file_type.is_file(),
            Self::Symlink => file_type.is_symlink(),
            Self::Fifo => file_type.is_fifo(),
            Self::Socket => file_type.is_socket(),
        }
    }

    /// Returns whether `file_type` is exactly this type.
    ///
    /// Device, pipe, and socket types only exist on unix targets; elsewhere
    /// their codes are accepted but match nothing.
    #[cfg(not(unix))]
    #[must_use]
    pub fn matches(self, file_type: fs::FileType) -> bool {
        match self {
            Self::Directory => file_type.is_dir(),
            Self::Regular => file_type.is_file(),
            Self::Symlink => file_type.is_symlink(),
            Self::BlockDevice | Self::CharDevice | Self::Fifo | Self::Socket => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_round_trips() {
        for code in ['b', 'c', 'd', 'f', 'l', 'p', 's'] {
            let file_type = FileType::from_code(code).expect("supported code");
            assert_eq!(file_type.code(), code);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let error = FileType::from_code('q').expect_err("unsupported code");
        assert_eq!(error.code, 'q');
    }
}
