//! Typed statistics records
//!
//! Each record is declared once with the wire name of every field. Numeric
//! fields are filled through slot indices, string fields through the text
//! callback of [`parse_stats`]. Fields the server sends that are not declared
//! here are ignored.

use crate::protocol::{parse_stats, ResponseError};

macro_rules! stats_record {
    (
        $(#[$meta:meta])*
        pub struct $record:ident {
            numeric {
                $( $(#[$nmeta:meta])* $num:ident => $num_key:literal, )*
            }
            text {
                $( $(#[$tmeta:meta])* $text:ident => $text_key:literal, )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $record {
            $( $(#[$nmeta])* pub $num: u64, )*
            $( $(#[$tmeta])* pub $text: String, )*
        }

        impl $record {
            /// Wire names of the numeric fields, in slot order
            pub const NUMERIC_FIELDS: &'static [&'static str] = &[$($num_key),*];

            /// Decode a stats body into this record
            pub fn decode(body: &[u8]) -> Result<Self, ResponseError> {
                let mut record = Self::default();
                let mut slots = vec![0u64; Self::NUMERIC_FIELDS.len()];

                {
                    let mut on_text = |name: &str, value: &str| {
                        match name {
                            $( $text_key => record.$text = value.to_string(), )*
                            _ => {}
                        }
                    };
                    parse_stats(body, Self::NUMERIC_FIELDS, &mut slots, Some(&mut on_text))?;
                }

                let mut slots = slots.into_iter();
                $( record.$num = slots.next().unwrap_or_default(); )*

                Ok(record)
            }
        }
    };
}

stats_record! {
    /// Server-wide statistics, as returned by `stats`
    pub struct Stats {
        numeric {
            current_jobs_urgent => "current-jobs-urgent",
            current_jobs_ready => "current-jobs-ready",
            current_jobs_reserved => "current-jobs-reserved",
            current_jobs_delayed => "current-jobs-delayed",
            current_jobs_buried => "current-jobs-buried",
            cmd_put => "cmd-put",
            cmd_peek => "cmd-peek",
            cmd_peek_ready => "cmd-peek-ready",
            cmd_peek_delayed => "cmd-peek-delayed",
            cmd_peek_buried => "cmd-peek-buried",
            cmd_reserve => "cmd-reserve",
            cmd_reserve_with_timeout => "cmd-reserve-with-timeout",
            cmd_delete => "cmd-delete",
            cmd_release => "cmd-release",
            cmd_use => "cmd-use",
            cmd_watch => "cmd-watch",
            cmd_ignore => "cmd-ignore",
            cmd_bury => "cmd-bury",
            cmd_kick => "cmd-kick",
            cmd_touch => "cmd-touch",
            cmd_stats => "cmd-stats",
            cmd_stats_job => "cmd-stats-job",
            cmd_stats_tube => "cmd-stats-tube",
            cmd_list_tubes => "cmd-list-tubes",
            cmd_list_tube_used => "cmd-list-tube-used",
            cmd_list_tubes_watched => "cmd-list-tubes-watched",
            cmd_pause_tube => "cmd-pause-tube",
            job_timeouts => "job-timeouts",
            total_jobs => "total-jobs",
            max_job_size => "max-job-size",
            current_tubes => "current-tubes",
            current_connections => "current-connections",
            current_producers => "current-producers",
            current_workers => "current-workers",
            current_waiting => "current-waiting",
            total_connections => "total-connections",
            pid => "pid",
            uptime => "uptime",
            binlog_oldest_index => "binlog-oldest-index",
            binlog_current_index => "binlog-current-index",
            binlog_records_migrated => "binlog-records-migrated",
            binlog_records_written => "binlog-records-written",
            binlog_max_size => "binlog-max-size",
        }
        text {
            version => "version",
            /// User CPU time, seconds with a fractional part
            rusage_utime => "rusage-utime",
            /// System CPU time, seconds with a fractional part
            rusage_stime => "rusage-stime",
            /// Random id generated at server start
            id => "id",
            hostname => "hostname",
            os => "os",
            platform => "platform",
        }
    }
}

stats_record! {
    /// Statistics for a single job, as returned by `stats-job`
    pub struct JobStats {
        numeric {
            id => "id",
            pri => "pri",
            age => "age",
            delay => "delay",
            ttr => "ttr",
            time_left => "time-left",
            file => "file",
            reserves => "reserves",
            timeouts => "timeouts",
            releases => "releases",
            buries => "buries",
            kicks => "kicks",
        }
        text {
            tube => "tube",
            /// One of `ready`, `delayed`, `reserved`, `buried`
            state => "state",
        }
    }
}

stats_record! {
    /// Statistics for a single tube, as returned by `stats-tube`
    pub struct TubeStats {
        numeric {
            current_jobs_urgent => "current-jobs-urgent",
            current_jobs_ready => "current-jobs-ready",
            current_jobs_reserved => "current-jobs-reserved",
            current_jobs_delayed => "current-jobs-delayed",
            current_jobs_buried => "current-jobs-buried",
            total_jobs => "total-jobs",
            current_using => "current-using",
            current_waiting => "current-waiting",
            current_watching => "current-watching",
            cmd_delete => "cmd-delete",
            cmd_pause_tube => "cmd-pause-tube",
            pause => "pause",
            pause_time_left => "pause-time-left",
        }
        text {
            name => "name",
        }
    }
}
