mod event_loop_tests;
mod sync_channel_tests;
