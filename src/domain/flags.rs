//! Named bit positions of the protocol's `flags` words.
//!
//! Positions are fixed by the schema (`flags.N?true`). Each table generates a
//! flag enum (one variant per bit) and a decoded struct of booleans.

use serde::{Deserialize, Serialize};

macro_rules! flag_table {
    (
        $(#[$meta:meta])*
        $flag:ident => $flags:ident {
            $($variant:ident / $field:ident = $bit:literal),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $flag {
            $($variant),*
        }

        impl $flag {
            pub const ALL: &'static [$flag] = &[$($flag::$variant),*];

            /// Bit position on the wire.
            pub const fn bit(self) -> u32 {
                match self {
                    $($flag::$variant => $bit),*
                }
            }

            pub const fn mask(self) -> i32 {
                1 << self.bit()
            }

            pub const fn is_set(self, raw: i32) -> bool {
                (raw & self.mask()) != 0
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub struct $flags {
            $(pub $field: bool),*
        }

        impl $flags {
            pub fn from_raw(raw: i32) -> Self {
                Self {
                    $($field: $flag::$variant.is_set(raw)),*
                }
            }

            pub fn contains(&self, flag: $flag) -> bool {
                match flag {
                    $($flag::$variant => self.$field),*
                }
            }

            pub fn to_raw(&self) -> i32 {
                let mut raw = 0;
                $(
                    if self.$field {
                        raw |= $flag::$variant.mask();
                    }
                )*
                raw
            }
        }
    };
}

flag_table! {
    /// Decoded `message.flags` / `messageService.flags`.
    MessageFlag => MessageFlags {
        Out / out = 1,
        Mentioned / mentioned = 4,
        MediaUnread / media_unread = 5,
        Silent / silent = 13,
        Post / post = 14,
    }
}

flag_table! {
    /// Decoded `user.flags`.
    UserFlag => UserFlags {
        IsSelf / is_self = 10,
        Contact / contact = 11,
        MutualContact / mutual_contact = 12,
        Deleted / deleted = 13,
        Bot / bot = 14,
        Verified / verified = 17,
        Restricted / restricted = 18,
        Min / min = 20,
    }
}

flag_table! {
    /// Decoded `chat.flags`.
    ChatFlag => ChatFlags {
        Creator / creator = 0,
        Kicked / kicked = 1,
        Left / left = 2,
        AdminsEnabled / admins_enabled = 3,
        Admin / admin = 4,
        Deactivated / deactivated = 5,
    }
}

flag_table! {
    /// Decoded `channel.flags`.
    ChannelFlag => ChannelFlags {
        Creator / creator = 0,
        Kicked / kicked = 1,
        Left / left = 2,
        Editor / editor = 3,
        Moderator / moderator = 4,
        Broadcast / broadcast = 5,
        Verified / verified = 7,
        Megagroup / megagroup = 8,
        Restricted / restricted = 9,
        Democracy / democracy = 10,
        Signatures / signatures = 11,
        Min / min = 12,
    }
}

/// `final` bit of every `updates.channelDifference*` constructor.
pub const CHANNEL_DIFFERENCE_FINAL: u32 = 0;

pub fn channel_difference_is_final(flags: i32) -> bool {
    (flags & (1 << CHANNEL_DIFFERENCE_FINAL)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_bit_decodes_to_single_flag() {
        for &flag in MessageFlag::ALL {
            let decoded = MessageFlags::from_raw(flag.mask());
            for &other in MessageFlag::ALL {
                assert_eq!(
                    decoded.contains(other),
                    other == flag,
                    "bit {} decoded {:?} as {:?}",
                    flag.bit(),
                    flag,
                    other
                );
            }
        }
    }

    #[test]
    fn test_message_flags_known_positions() {
        assert_eq!(MessageFlag::Out.bit(), 1);
        assert_eq!(MessageFlag::Mentioned.bit(), 4);
        assert_eq!(MessageFlag::MediaUnread.bit(), 5);
        assert_eq!(MessageFlag::Silent.bit(), 13);
        assert_eq!(MessageFlag::Post.bit(), 14);
    }

    #[test]
    fn test_unrelated_bits_are_ignored() {
        // bits 0, 2 and 8 carry optional-field presence, not semantic flags
        let raw = (1 << 0) | (1 << 2) | (1 << 8);
        assert_eq!(MessageFlags::from_raw(raw), MessageFlags::default());
    }

    #[test]
    fn test_to_raw_reencodes_decoded_bits() {
        let raw = MessageFlag::Out.mask() | MessageFlag::Silent.mask();
        let flags = MessageFlags::from_raw(raw);
        assert!(flags.out && flags.silent);
        assert_eq!(flags.to_raw(), raw);
    }

    #[test]
    fn test_channel_flags() {
        let flags = ChannelFlags::from_raw(ChannelFlag::Megagroup.mask());
        assert!(flags.megagroup);
        assert!(!flags.broadcast);
    }

    #[test]
    fn test_channel_difference_final_bit() {
        assert!(channel_difference_is_final(1));
        assert!(!channel_difference_is_final(2));
    }
}
