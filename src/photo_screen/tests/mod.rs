mod screen_test;
