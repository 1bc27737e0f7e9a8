mod resolve_layout;
