mod test_dispatcher;
mod test_routes;
mod test_toggle;
